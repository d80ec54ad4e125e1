use serde::Deserialize;
use thiserror::Error;
use yew::AttrValue;

use crate::hero::HeroProps;

const SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content field `{0}` must not be blank")]
    Empty(&'static str),
}

/// Hero copy as written in `site.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(default)]
    pub secondary_cta_text: Option<String>,
    #[serde(default)]
    pub secondary_cta_link: Option<String>,
    pub image_url: String,
}

impl HeroContent {
    pub fn to_props(&self) -> HeroProps {
        HeroProps {
            title: AttrValue::from(self.title.clone()),
            subtitle: AttrValue::from(self.subtitle.clone()),
            cta_text: AttrValue::from(self.cta_text.clone()),
            cta_link: AttrValue::from(self.cta_link.clone()),
            secondary_cta_text: self.secondary_cta_text.clone().map(AttrValue::from),
            secondary_cta_link: self.secondary_cta_link.clone().map(AttrValue::from),
            image_url: AttrValue::from(self.image_url.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub page_title: String,
    pub hero: HeroContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_title: "Queens Park".into(),
            hero: HeroContent {
                title: "Welcome to Queens Park".into(),
                subtitle: "Where wonder sparks, friendships blossom, and every ride ends with a smile."
                    .into(),
                cta_text: "Plan Your Visit".into(),
                cta_link: "/tickets".into(),
                secondary_cta_text: Some("Explore Rides".into()),
                secondary_cta_link: Some("/rides".into()),
                image_url: "/assets/kids.jpg".into(),
            },
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Content embedded at build time, or the defaults if it is rejected.
    pub fn load() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}; falling back to built-in content");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("page_title", &self.page_title),
            ("hero.title", &self.hero.title),
            ("hero.cta_text", &self.hero.cta_text),
            ("hero.cta_link", &self.hero.cta_link),
            ("hero.image_url", &self.hero.image_url),
        ];
        match required.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::Empty(*field)),
            None => Ok(()),
        }
    }
}
