//! Read model of the item detail page

use crate::catalog::domain::{ComplianceLevel, CveCounts, TagOption, ToggleKey};
use serde::Serialize;

/// Everything the detail page shows for one item and configuration
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetailView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub tags: Vec<String>,
    pub image: String,
    /// Header facts whose toggles are on, in header order
    pub facts: Vec<HeaderFact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve_panel: Option<CvePanelView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_url: Option<String>,
    pub configuration: ConfigurationView,
    pub tag_search: String,
    pub tag_options: Vec<TagOption>,
    pub image_reference: String,
    pub pull_commands: Vec<String>,
    pub sections: Vec<SectionView>,
    pub jump_links: Vec<JumpLinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_section: Option<String>,
}

impl ItemDetailView {
    pub fn fact(&self, key: ToggleKey) -> Option<&HeaderFact> {
        self.facts.iter().find(|fact| fact.key == key)
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }

    pub fn has_jump_link(&self, id: &str) -> bool {
        self.jump_links.iter().any(|link| link.id == id)
    }
}

/// A single fact in the page header, gated by `key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderFact {
    pub key: ToggleKey,
    pub label: String,
    pub value: String,
    /// Marked when the highlights toggle is on and the fact is NEW
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CvePanelView {
    pub counts: CveCounts,
    pub total: u32,
    pub scanned: String,
    pub highlighted: bool,
}

/// The tag picker and the option checkboxes
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationView {
    pub tag: String,
    pub tag_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published: Option<String>,
    pub compliance: ComplianceLevel,
    pub package_manager: bool,
    pub shell: bool,
    pub toolchain: bool,
    pub options_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub body: Vec<String>,
    /// Marked when the highlights toggle is on and the section is toggle-gated
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JumpLinkView {
    pub id: String,
    pub title: String,
    pub active: bool,
}
