//! Page copy and asset references, kept out of the components.

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub universe: Universe,
    pub sagas: Sagas,
    pub heroes: Heroes,
    pub quotes: Quotes,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Universe {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sagas {
    pub heading: String,
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Heroes {
    pub heading: String,
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quotes {
    pub background: String,
    pub items: Vec<Quote>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub owner: String,
    pub rights: String,
    pub disclaimer: String,
}

impl SiteContent {
    /// Content bundled into the binary at compile time.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}
