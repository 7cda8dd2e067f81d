use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const SITE_FILE: &str = "site.json";

static GLOBAL_CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| {
    let res = Catalog::load();
    if let Err(e) = &res {
        log::error!("{e}");
    }
    res
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

/// In-page anchors the page composes. Nav links may only point at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Services,
    Portfolio,
    Consultation,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Services,
        Section::Portfolio,
        Section::Consultation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Consultation => "consultation",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    PenTool,
    Cpu,
    Layers,
    Briefcase,
    Calendar,
    Mail,
    Download,
    ExternalLink,
    ChevronRight,
    Linkedin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::PenTool => "✏️",
            Icon::Cpu => "🖥️",
            Icon::Layers => "🧱",
            Icon::Briefcase => "💼",
            Icon::Calendar => "📅",
            Icon::Mail => "📧",
            Icon::Download => "📥",
            Icon::ExternalLink => "🔗",
            Icon::ChevronRight => "›",
            Icon::Linkedin => "",
        }
    }

    /// Icon font class for icons that come from devicon rather than a glyph.
    pub fn font_class(self) -> Option<&'static str> {
        match self {
            Icon::Linkedin => Some("devicon-linkedin-plain"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub category: String,
    pub description: String,
    pub color_theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub email: String,
    pub calendar_url: String,
    pub linkedin_url: String,
    pub website_url: String,
    pub resume_href: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn full_name(&self) -> String {
        let mut name = String::new();
        for (i, part) in [&self.first_name, &self.last_name].into_iter().enumerate() {
            if i > 0 {
                name.push(' ');
            }
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(&chars.as_str().to_lowercase());
            }
        }
        name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusArea {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub summary: String,
    pub focus: Vec<FocusArea>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub resume_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCopy<T> {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub entries: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub body: String,
    pub booking_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub nav_links: Vec<NavLink>,
    pub hero: Hero,
    pub about: About,
    pub services: SectionCopy<ServiceOffering>,
    pub experience: SectionCopy<ExperienceEntry>,
    pub portfolio: SectionCopy<ProjectEntry>,
    pub contact: Contact,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Site content file {0} is missing")]
    Missing(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
    #[error("Nav link {name} points at unknown section {href}")]
    DanglingAnchor { name: String, href: String },
}

impl Catalog {
    fn load() -> Result<Self, CatalogError> {
        let file = Content::get(SITE_FILE).ok_or(CatalogError::Missing(SITE_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_slice(data).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every nav link has to land on a section the page actually renders.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self
            .nav_links
            .iter()
            .find(|l| Section::from_href(&l.href).is_none())
        {
            Some(link) => Err(CatalogError::DanglingAnchor {
                name: link.name.clone(),
                href: link.href.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// The embedded site content, parsed once per process.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
}
