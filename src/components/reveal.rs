use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Entrance transition parameters: where an element starts relative to its
/// resting place, and how long it takes to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub x: f32,
    pub y: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::up(30.0)
    }
}

impl Entrance {
    /// Rise into place from `px` below.
    #[must_use]
    pub fn up(px: f32) -> Self {
        Self {
            x: 0.0,
            y: px,
            duration: 0.8,
            delay: 0.0,
        }
    }

    /// Slide in from `px` to the left.
    #[must_use]
    pub fn left(px: f32) -> Self {
        Self {
            x: -px,
            ..Self::up(0.0)
        }
    }

    /// Slide in from `px` to the right.
    #[must_use]
    pub fn right(px: f32) -> Self {
        Self {
            x: px,
            ..Self::up(0.0)
        }
    }

    #[must_use]
    pub fn fade() -> Self {
        Self::up(0.0)
    }

    #[must_use]
    pub fn duration(self, seconds: f32) -> Self {
        Self {
            duration: seconds,
            ..self
        }
    }

    #[must_use]
    pub fn delay(self, seconds: f32) -> Self {
        Self {
            delay: seconds,
            ..self
        }
    }

    /// Offset the delay for the `index`th item of a list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stagger(self, index: usize, step: f32) -> Self {
        self.delay(self.delay + index as f32 * step)
    }

    /// CSS custom properties consumed by the `.reveal` rules.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "--reveal-x: {}px; --reveal-y: {}px; --reveal-duration: {}s; --reveal-delay: {}s;",
            self.x, self.y, self.duration, self.delay
        )
    }
}

/// Wraps content that transitions in the first time it scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (revealed, set_revealed) = signal(false);

    // Latch: once shown, leaving the viewport does not hide it again.
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || {
                if revealed.get() {
                    format!("reveal reveal--visible {class}")
                } else {
                    format!("reveal {class}")
                }
            }
            style=entrance.style()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rises_from_below() {
        let e = Entrance::default();
        assert_eq!((e.x, e.y), (0.0, 30.0));
        assert!((e.duration - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn sideways_entrances() {
        assert_eq!(Entrance::left(30.0).x, -30.0);
        assert_eq!(Entrance::right(30.0).x, 30.0);
        assert_eq!(Entrance::left(30.0).y, 0.0);
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let e = Entrance::up(20.0).delay(0.6).stagger(2, 0.1);
        assert!((e.delay - 0.8).abs() < 1e-6);
    }

    #[test]
    fn style_renders_custom_properties() {
        let style = Entrance::up(20.0).duration(0.6).delay(0.4).style();
        assert_eq!(
            style,
            "--reveal-x: 0px; --reveal-y: 20px; --reveal-duration: 0.6s; --reveal-delay: 0.4s;"
        );
    }
}
