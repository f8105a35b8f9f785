//! In-page navigation between sections.
//!
//! Scrolling goes through [`Viewport`] so the "section missing means do
//! nothing" rule is independent of the DOM.

pub trait Viewport {
    type Section;

    fn section(&self, id: &str) -> Option<Self::Section>;

    fn scroll_into_view(&self, section: &Self::Section);

    fn scroll_to_top(&self);
}

/// Strip the leading `#` from an anchor href.
#[must_use]
pub fn section_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    (!id.is_empty()).then_some(id)
}

/// Scroll the section named by `href` into view.
///
/// Returns `false` without touching the viewport when no such section exists.
pub fn scroll_to_section<V: Viewport>(viewport: &V, href: &str) -> bool {
    let Some(section) = section_id(href).and_then(|id| viewport.section(id)) else {
        return false;
    };
    viewport.scroll_into_view(&section);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::content::{FOOTER_LINKS, NAV_ITEMS};

    #[derive(Default)]
    struct FakeViewport {
        sections: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
        top: RefCell<usize>,
    }

    impl Viewport for FakeViewport {
        type Section = String;

        fn section(&self, id: &str) -> Option<String> {
            self.sections
                .iter()
                .find(|s| **s == id)
                .map(|s| (*s).to_string())
        }

        fn scroll_into_view(&self, section: &String) {
            self.scrolled.borrow_mut().push(section.clone());
        }

        fn scroll_to_top(&self) {
            *self.top.borrow_mut() += 1;
        }
    }

    fn full_page() -> FakeViewport {
        FakeViewport {
            sections: vec!["home", "about", "skills", "projects", "contact"],
            ..FakeViewport::default()
        }
    }

    #[test]
    fn every_nav_item_scrolls_to_its_section() {
        for item in NAV_ITEMS {
            let viewport = full_page();
            assert!(scroll_to_section(&viewport, item.href));
            assert_eq!(*viewport.scrolled.borrow(), vec![item.key.to_string()]);
        }
    }

    #[test]
    fn footer_links_scroll_to_existing_sections() {
        let viewport = full_page();
        for link in FOOTER_LINKS {
            assert!(scroll_to_section(&viewport, link.href));
        }
        assert_eq!(viewport.scrolled.borrow().len(), FOOTER_LINKS.len());
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let viewport = FakeViewport {
            sections: vec!["home"],
            ..FakeViewport::default()
        };
        assert!(!scroll_to_section(&viewport, "#contact"));
        assert!(viewport.scrolled.borrow().is_empty());
        assert_eq!(*viewport.top.borrow(), 0);
    }

    #[test]
    fn empty_href_is_a_no_op() {
        let viewport = full_page();
        assert!(!scroll_to_section(&viewport, "#"));
        assert!(!scroll_to_section(&viewport, ""));
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn section_id_accepts_bare_ids() {
        assert_eq!(section_id("#about"), Some("about"));
        assert_eq!(section_id("about"), Some("about"));
        assert_eq!(section_id("#"), None);
    }
}
