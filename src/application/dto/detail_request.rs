use crate::catalog::domain::{ComplianceLevel, ImageTag, IncludeOption};
use crate::catalog::services::DetailSection;

/// DetailRequest - Input of the item detail use case
///
/// The tag is selected first, then includes are switched on and omits
/// switched off in order, so the tag/include coupling applies exactly as it
/// would for a user clicking through the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Item id, name or slug
    pub item: String,
    pub tag: Option<ImageTag>,
    pub compliance: Option<ComplianceLevel>,
    pub includes: Vec<IncludeOption>,
    pub omits: Vec<IncludeOption>,
    /// Section the reader has scrolled to
    pub section: Option<DetailSection>,
    pub tag_search: String,
    /// Minutes since the last scan, from the scan ticker
    pub scanned_minutes: u64,
}

impl DetailRequest {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            tag: None,
            compliance: None,
            includes: Vec::new(),
            omits: Vec::new(),
            section: None,
            tag_search: String::new(),
            scanned_minutes: 0,
        }
    }

    pub fn tag(mut self, tag: ImageTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn compliance(mut self, compliance: ComplianceLevel) -> Self {
        self.compliance = Some(compliance);
        self
    }

    pub fn include(mut self, option: IncludeOption) -> Self {
        self.includes.push(option);
        self
    }

    pub fn omit(mut self, option: IncludeOption) -> Self {
        self.omits.push(option);
        self
    }

    pub fn section(mut self, section: DetailSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn tag_search(mut self, query: impl Into<String>) -> Self {
        self.tag_search = query.into();
        self
    }

    pub fn scanned_minutes(mut self, minutes: u64) -> Self {
        self.scanned_minutes = minutes;
        self
    }
}
