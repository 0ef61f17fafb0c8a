use super::image_configuration::ImageTag;
use serde::Serialize;

/// One entry of the tag picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub value: ImageTag,
    pub label: String,
    pub last_published: Option<String>,
}

impl TagOption {
    pub fn new(value: ImageTag) -> Self {
        let label = value.label().to_string();
        Self {
            value,
            label,
            last_published: None,
        }
    }

    pub fn with_last_published(mut self, label: impl Into<String>) -> Self {
        self.last_published = Some(label.into());
        self
    }

    fn matches(&self, needle: &str) -> bool {
        self.value.value().to_lowercase().contains(needle)
            || self.label.to_lowercase().contains(needle)
    }
}

/// Known vulnerabilities by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CveCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl CveCounts {
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// Detail-page facts about the image behind a catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProfile {
    base_name: String,
    version: String,
    tags: Vec<TagOption>,
    fips_status: Option<String>,
    updated: String,
    scanned: String,
    upstream_url: Option<String>,
    cve_counts: CveCounts,
}

impl ImageProfile {
    pub fn new(base_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            version: version.into(),
            tags: Vec::new(),
            fips_status: None,
            updated: String::new(),
            scanned: String::new(),
            upstream_url: None,
            cve_counts: CveCounts::default(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<TagOption>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_fips_status(mut self, status: impl Into<String>) -> Self {
        self.fips_status = Some(status.into());
        self
    }

    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = updated.into();
        self
    }

    pub fn with_scanned(mut self, scanned: impl Into<String>) -> Self {
        self.scanned = scanned.into();
        self
    }

    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = Some(url.into());
        self
    }

    pub fn with_cve_counts(mut self, counts: CveCounts) -> Self {
        self.cve_counts = counts;
        self
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tags(&self) -> &[TagOption] {
        &self.tags
    }

    pub fn fips_status(&self) -> Option<&str> {
        self.fips_status.as_deref()
    }

    pub fn updated(&self) -> &str {
        &self.updated
    }

    pub fn scanned(&self) -> &str {
        &self.scanned
    }

    pub fn upstream_url(&self) -> Option<&str> {
        self.upstream_url.as_deref()
    }

    pub fn cve_counts(&self) -> CveCounts {
        self.cve_counts
    }

    pub fn tag(&self, tag: &ImageTag) -> Option<&TagOption> {
        self.tags.iter().find(|option| &option.value == tag)
    }

    /// Tags whose value or label contains `query`, case-insensitively
    pub fn search_tags(&self, query: &str) -> Vec<&TagOption> {
        let needle = query.trim().to_lowercase();
        self.tags
            .iter()
            .filter(|option| needle.is_empty() || option.matches(&needle))
            .collect()
    }
}
