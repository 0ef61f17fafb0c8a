//! Read model of the feature-toggle side panel

use crate::catalog::domain::{MetadataToggles, ToggleKey};
use serde::Serialize;

/// Which page the panel is attached to. Some switches only exist on the
/// detail page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPage {
    #[default]
    Catalog,
    Detail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlPanelView {
    pub page: PanelPage,
    pub groups: Vec<ToggleGroupView>,
    /// State of the "highlight new features" button
    pub highlights_active: bool,
}

impl ControlPanelView {
    pub fn entry(&self, key: ToggleKey) -> Option<&ToggleEntryView> {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .find(|entry| entry.key == key)
    }

    pub fn build(toggles: &MetadataToggles, page: PanelPage) -> Self {
        let entry = |key: ToggleKey| ToggleEntryView {
            key,
            label: key.label().to_string(),
            enabled: toggles.get(key),
            nested: key.is_master_child(),
        };

        let mut new_keys = vec![
            ToggleKey::NewSection,
            ToggleKey::FipsChips,
            ToggleKey::UpdatedTime,
            ToggleKey::ScannedTime,
            ToggleKey::VersionNumber,
        ];
        if page == PanelPage::Detail {
            new_keys.extend([ToggleKey::ZeroCves, ToggleKey::Sbom]);
        }

        let groups = vec![
            ToggleGroupView {
                title: "NEW".to_string(),
                entries: new_keys.into_iter().map(entry).collect(),
            },
            ToggleGroupView {
                title: "Best of QUAY".to_string(),
                entries: [
                    ToggleKey::PublishedTime,
                    ToggleKey::DistributorName,
                    ToggleKey::Favoriting,
                ]
                .into_iter()
                .map(entry)
                .collect(),
            },
            ToggleGroupView {
                title: "Best of CATALOG".to_string(),
                entries: vec![entry(ToggleKey::Filtering)],
            },
        ];

        Self {
            page,
            groups,
            highlights_active: toggles.highlights_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleGroupView {
    pub title: String,
    pub entries: Vec<ToggleEntryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleEntryView {
    pub key: ToggleKey,
    pub label: String,
    pub enabled: bool,
    /// Rendered indented under the master switch
    pub nested: bool,
}
