use super::error::ContentError;
use crate::markup::{self, RenderedBlock};
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_WEBSITE_ICON: &str = "🌐";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Tip {
    pub fn new(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Rendered fresh on every call; nothing is cached
    pub fn render(&self) -> Vec<RenderedBlock> {
        markup::render(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Website {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_WEBSITE_ICON.to_string()
}

impl Website {
    pub fn new(id: &str, title: &str, url: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Ordered tips and websites, plus an optional contact address for the footer.
///
/// Always holds at least one tip, and ids are unique within each list.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    tips: Vec<Tip>,
    websites: Vec<Website>,
    contact: Option<String>,
}

impl ContentLibrary {
    pub fn new(
        tips: Vec<Tip>,
        websites: Vec<Website>,
        contact: Option<String>,
    ) -> Result<Self, ContentError> {
        if tips.is_empty() {
            return Err(ContentError::NoTips);
        }

        let mut seen = HashSet::new();
        for tip in &tips {
            if !seen.insert(tip.id.as_str()) {
                return Err(ContentError::DuplicateTipId(tip.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for site in &websites {
            if !seen.insert(site.id.as_str()) {
                return Err(ContentError::DuplicateWebsiteId(site.id.clone()));
            }
        }

        let contact = contact
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            tips,
            websites,
            contact,
        })
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn websites(&self) -> &[Website] {
        &self.websites
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn first_tip(&self) -> &Tip {
        // Non-empty, checked in `new`
        &self.tips[0]
    }

    pub fn tip(&self, id: &str) -> Option<&Tip> {
        self.tips.iter().find(|tip| tip.id == id)
    }

    pub fn tip_index(&self, id: &str) -> Option<usize> {
        self.tips.iter().position(|tip| tip.id == id)
    }

    pub fn website(&self, id: &str) -> Option<&Website> {
        self.websites.iter().find(|site| site.id == id)
    }
}
