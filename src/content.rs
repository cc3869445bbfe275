use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CATALOG_FILE: &str = "catalog.json";

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    load_catalog(CATALOG_FILE).unwrap_or_else(|err| {
        log::error!("failed to load {CATALOG_FILE}: {err}");
        Catalog::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    ShieldCheck,
    Smartphone,
    Cpu,
    Globe,
    Database,
    Zap,
    Layout,
    Terminal,
    Code,
    Github,
    Linkedin,
    Mail,
}

impl IconToken {
    /// Icon font class rendered for the token.
    pub fn class(self) -> &'static str {
        match self {
            IconToken::ShieldCheck => "icon-shield-check",
            IconToken::Smartphone => "icon-smartphone",
            IconToken::Cpu => "icon-cpu",
            IconToken::Globe => "icon-globe",
            IconToken::Database => "icon-database",
            IconToken::Zap => "icon-zap",
            IconToken::Layout => "icon-layout",
            IconToken::Terminal => "icon-terminal",
            IconToken::Code => "icon-code",
            IconToken::Github => "icon-github",
            IconToken::Linkedin => "icon-linkedin",
            IconToken::Mail => "icon-mail",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectRecord>,
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub headline: String,
    pub focus: String,
    pub summary: String,
    pub objective: Vec<String>,
    pub about: String,
    pub stats: Vec<Stat>,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: IconToken,
}

impl SocialLink {
    /// Mail links open in place; everything else opens a new tab.
    pub fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub icon: IconToken,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub color: String,
    pub icon: IconToken,
    pub links: Option<ProjectLinks>,
}

impl ProjectRecord {
    /// The first `limit` tags and how many were left out.
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }

    pub fn demo_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.demo.as_deref())
    }

    pub fn code_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.code.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl Catalog {
    /// Every skill in category order, twice over, for the looping marquee.
    pub fn skill_marquee(&self) -> impl Iterator<Item = &str> + '_ {
        let flat = || {
            self.skills
                .iter()
                .flat_map(|g| g.items.iter().map(String::as_str))
        };
        flat().chain(flat())
    }
}

pub fn load_catalog(name: &str) -> Result<Catalog, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse_catalog(&file.data)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog, ContentError> {
    serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))
}
