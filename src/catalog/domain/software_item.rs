use super::facet::{Facet, FacetValues};
use super::recency::Recency;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length for item identifiers
const MAX_ITEM_ID_LENGTH: usize = 64;

/// NewType wrapper for a catalog item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CatalogError::Validation {
                message: "Item id cannot be empty".to_string(),
            }
            .into());
        }

        if id.len() > MAX_ITEM_ID_LENGTH {
            return Err(CatalogError::Validation {
                message: format!(
                    "Item id is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_ITEM_ID_LENGTH
                ),
            }
            .into());
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(CatalogError::Validation {
                message: format!(
                    "Item id '{}' contains invalid characters. Only ASCII alphanumerics, hyphens, underscores and dots are allowed.",
                    id
                ),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog listing. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftwareItem {
    id: ItemId,
    name: String,
    description: String,
    logo: String,
    tags: Vec<String>,
    provider: String,
    published: String,
}

impl SoftwareItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            logo: String::new(),
            tags: Vec::new(),
            provider: String::new(),
            published: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = published.into();
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Publication recency label, e.g. "5 minutes ago"
    pub fn published(&self) -> &str {
        &self.published
    }

    pub fn published_recency(&self) -> Option<Recency> {
        Recency::parse(&self.published)
    }

    /// Lowercase, dash-separated form of the name, used as the image name
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }
}

impl FacetValues for SoftwareItem {
    /// Items carry a provider and a tag list; tags hold both the item type
    /// and its category. Other facets have no backing attribute yet.
    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Provider if !self.provider.is_empty() => vec![self.provider.as_str()],
            Facet::Type | Facet::Category => self.tags.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
