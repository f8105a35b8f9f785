//! Static display records for the page sections.
//!
//! Everything visible to the visitor is a translation key; these tables only
//! fix ordering, icons, accents and outbound links.

use serde::Deserialize;

use crate::components::Icon;
use crate::error::ContentError;
use crate::i18n::Dictionary;
use crate::preferences::Language;

/// Path prefix the site is deployed under, fixed at build time.
pub const BASE_PATH: &str = env!("PORTFOLIO_BASE_PATH");

pub const LINKEDIN_URL: &str = "https://linkedin.com/in/elarosi";
pub const GITHUB_URL: &str = "https://github.com/ahmed-elarosi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub href: &'static str,
}

impl NavItem {
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("nav.{}", self.key)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { key: "home", href: "#home" },
    NavItem { key: "about", href: "#about" },
    NavItem { key: "skills", href: "#skills" },
    NavItem { key: "projects", href: "#projects" },
    NavItem { key: "contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
    Pink,
    Red,
    Gray,
}

impl Accent {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent--blue",
            Accent::Green => "accent--green",
            Accent::Purple => "accent--purple",
            Accent::Orange => "accent--orange",
            Accent::Cyan => "accent--cyan",
            Accent::Pink => "accent--pink",
            Accent::Red => "accent--red",
            Accent::Gray => "accent--gray",
        }
    }
}

/// Either literal text or a key into the translation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Static(&'static str),
    Key(&'static str),
}

impl Text {
    pub fn resolve(self, lookup: impl Fn(&str) -> String) -> String {
        match self {
            Text::Static(s) => s.to_string(),
            Text::Key(key) => lookup(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Href {
    Url(&'static str),
    /// `mailto:` link to the address stored under the given key.
    MailtoKey(&'static str),
}

impl Href {
    pub fn resolve(self, lookup: impl Fn(&str) -> String) -> String {
        match self {
            Href::Url(url) => url.to_string(),
            Href::MailtoKey(key) => format!("mailto:{}", lookup(key)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub key: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

impl Highlight {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("about.highlights.{}.title", self.key)
    }

    #[must_use]
    pub fn subtitle_key(&self) -> String {
        format!("about.highlights.{}.subtitle", self.key)
    }
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight { key: "development", icon: Icon::Code, accent: Accent::Blue },
    Highlight { key: "business", icon: Icon::TrendingUp, accent: Accent::Green },
    Highlight { key: "fullstack", icon: Icon::Users, accent: Accent::Purple },
    Highlight { key: "solver", icon: Icon::Award, accent: Accent::Orange },
];

/// Reasons listed in the About call-out, as `about.why.<key>`.
pub const WHY_POINTS: [&str; 3] = ["technical", "business", "problem"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

impl SkillCategory {
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("skills.categories.{}", self.key)
    }

    #[must_use]
    pub fn items_key(&self) -> String {
        format!("skills.items.{}", self.key)
    }
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory { key: "programming", icon: Icon::Code, accent: Accent::Blue },
    SkillCategory { key: "web", icon: Icon::Globe, accent: Accent::Green },
    SkillCategory { key: "webTech", icon: Icon::Layers, accent: Accent::Purple },
    SkillCategory { key: "devops", icon: Icon::Server, accent: Accent::Orange },
    SkillCategory { key: "cloud", icon: Icon::Cloud, accent: Accent::Cyan },
    SkillCategory { key: "tools", icon: Icon::GitBranch, accent: Accent::Pink },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proficiency {
    pub key: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
}

impl Proficiency {
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("skills.proficiency.{}", self.key)
    }
}

pub const PROFICIENCIES: [Proficiency; 4] = [
    Proficiency { key: "frontend", level: 90 },
    Proficiency { key: "backend", level: 85 },
    Proficiency { key: "devops", level: 80 },
    Proficiency { key: "data", level: 88 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub label: Text,
    pub value: Text,
    /// `None` renders the card without a Connect button.
    pub href: Option<Href>,
    pub icon: Icon,
    pub accent: Accent,
}

pub const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        label: Text::Key("contact.labels.email"),
        value: Text::Key("contact.email"),
        href: Some(Href::MailtoKey("contact.email")),
        icon: Icon::Mail,
        accent: Accent::Red,
    },
    ContactMethod {
        label: Text::Key("contact.labels.linkedin"),
        value: Text::Static("Ahmed Elarosi"),
        href: Some(Href::Url(LINKEDIN_URL)),
        icon: Icon::Linkedin,
        accent: Accent::Blue,
    },
    ContactMethod {
        label: Text::Key("contact.labels.github"),
        value: Text::Static("Ahmed Elarosi"),
        href: Some(Href::Url(GITHUB_URL)),
        icon: Icon::Github,
        accent: Accent::Gray,
    },
    ContactMethod {
        label: Text::Key("contact.labels.location"),
        value: Text::Key("contact.location"),
        href: None,
        icon: Icon::MapPin,
        accent: Accent::Green,
    },
];

/// Info strip below the contact call-out, as `contact.info.<key>`.
pub const CONTACT_INFO: [&str; 3] = ["response", "availability", "timezone"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: Href,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: Href::Url(GITHUB_URL), icon: Icon::Github },
    SocialLink { label: "LinkedIn", href: Href::Url(LINKEDIN_URL), icon: Icon::Linkedin },
    SocialLink { label: "Email", href: Href::MailtoKey("contact.email"), icon: Icon::Mail },
];

/// Footer quick links, a subset of the navigation.
pub const FOOTER_LINKS: [NavItem; 3] = [NAV_ITEMS[1], NAV_ITEMS[3], NAV_ITEMS[4]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStat {
    pub value: &'static str,
    pub key: &'static str,
}

impl ProjectStat {
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("projects.stats.{}", self.key)
    }
}

pub const PROJECT_STATS: [ProjectStat; 4] = [
    ProjectStat { value: "15+", key: "completed" },
    ProjectStat { value: "3+", key: "experience" },
    ProjectStat { value: "10+", key: "technologies" },
    ProjectStat { value: "100%", key: "satisfaction" },
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectTab {
    #[default]
    Software,
    Data,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 2] = [ProjectTab::Software, ProjectTab::Data];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ProjectTab::Software => "software",
            ProjectTab::Data => "data",
        }
    }

    #[must_use]
    pub fn label_key(self) -> String {
        format!("projects.tabs.{}", self.key())
    }

    #[must_use]
    pub fn projects_key(self) -> String {
        format!("projects.{}", self.key())
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            ProjectTab::Software => Icon::Code,
            ProjectTab::Data => Icon::BarChart,
        }
    }

    #[must_use]
    pub fn accent(self) -> Accent {
        match self {
            ProjectTab::Software => Accent::Blue,
            ProjectTab::Data => Accent::Green,
        }
    }

    /// The projects shown while this tab is active.
    pub fn projects(self, dictionary: &Dictionary) -> Result<Vec<Project>, ContentError> {
        dictionary.records(&self.projects_key())
    }
}

/// Join a site-relative asset path onto the deployment base path.
#[must_use]
pub fn asset_path(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    format!("{base}/{relative}")
}

#[must_use]
pub fn cv_href(base: &str, language: Language) -> String {
    asset_path(base, &format!("assets/CV_{}.pdf", language.short_label()))
}

/// File name offered to the browser's save dialog.
#[must_use]
pub fn cv_file_name(language: Language) -> String {
    format!("Ahmed_Elarosi_resume_{}.pdf", language.short_label())
}
