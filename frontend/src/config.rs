use log::{error, Level};
use serde::Deserialize;

use crate::components::icon::IconName;
use crate::observers::scroll::ScrollThreshold;

/// The header turns opaque once the page is scrolled further than this.
pub const HEADER_SCROLL_THRESHOLD: ScrollThreshold = ScrollThreshold::new(40.0);

/// Fraction of a section that must be on screen before it slides in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_JSON: &str = include_str!("../site.json");

const CDN: &str = "https://cdn.poehali.dev/projects/0047dde1-3e5b-4e39-bcbd-4b74807524f7/files";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub images: Images,
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Images {
    pub hero: String,
    pub character: String,
    pub arena: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub href: String,
}

impl SocialLink {
    fn new(icon: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            href: String::new(),
        }
    }

    pub fn icon(&self) -> IconName {
        IconName::parse_or(&self.icon, IconName::Globe)
    }

    /// Destination to render. Unwired links point at `#` so they stay inert.
    pub fn href(&self) -> &str {
        match self.href.trim() {
            "" => "#",
            href => href,
        }
    }
}

impl Default for Images {
    fn default() -> Self {
        Self {
            hero: format!("{CDN}/ed053305-4df3-455a-941d-be8a49b8f5b5.jpg"),
            character: format!("{CDN}/4d7a959a-336f-478e-94b5-c9a97174512b.jpg"),
            arena: format!("{CDN}/dfb6de38-0ea6-4833-8a29-52dbc8d00b31.jpg"),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images: Images::default(),
            socials: vec![
                SocialLink::new("Send", "Telegram"),
                SocialLink::new("MessageCircle", "Discord"),
                SocialLink::new("Youtube", "YouTube"),
                SocialLink::new("Music", "TikTok"),
                SocialLink::new("Globe", "VK"),
            ],
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the site document bundled at build time. A broken document is
    /// logged and replaced by the defaults so the page still renders.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(config) => config,
            Err(err) => {
                error!("invalid site.json, falling back to defaults: {}", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteConfig, SocialLink, SITE_JSON};
    use crate::components::icon::IconName;

    #[test]
    fn bundled_document_matches_defaults() {
        let config = SiteConfig::parse(SITE_JSON).expect("bundled site.json parses");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = SiteConfig::parse(r#"{ "images": { "hero": "/assets/hero.jpg" } }"#).unwrap();
        assert_eq!(config.images.hero, "/assets/hero.jpg");
        assert_eq!(config.images.arena, SiteConfig::default().images.arena);
        assert_eq!(config.socials.len(), 5);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SiteConfig::parse("{ socials: ").is_err());
        assert!(SiteConfig::parse(r#"{ "socials": [{ "href": "x" }] }"#).is_err());
    }

    #[test]
    fn unwired_social_links_render_as_placeholder() {
        let config = SiteConfig::default();
        assert!(config.socials.iter().all(|social| social.href() == "#"));

        let wired = SocialLink {
            icon: "Send".into(),
            label: "Telegram".into(),
            href: "https://t.me/volleyhub".into(),
        };
        assert_eq!(wired.href(), "https://t.me/volleyhub");
    }

    #[test]
    fn unknown_social_icon_falls_back_to_globe() {
        let social = SocialLink {
            icon: "Mastodon".into(),
            label: "Mastodon".into(),
            href: String::new(),
        };
        assert_eq!(social.icon(), IconName::Globe);
        assert_eq!(SiteConfig::default().socials[0].icon(), IconName::Send);
    }
}
