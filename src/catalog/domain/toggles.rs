use serde::Serialize;
use std::fmt;

/// Name of a metadata toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleKey {
    /// Master switch of the NEW section
    NewSection,
    FipsChips,
    UpdatedTime,
    ScannedTime,
    VersionNumber,
    #[serde(rename = "zeroCVEs")]
    ZeroCves,
    Sbom,
    PublishedTime,
    DistributorName,
    Favoriting,
    Filtering,
    HighlightsActive,
}

impl ToggleKey {
    pub const ALL: [ToggleKey; 12] = [
        ToggleKey::NewSection,
        ToggleKey::FipsChips,
        ToggleKey::UpdatedTime,
        ToggleKey::ScannedTime,
        ToggleKey::VersionNumber,
        ToggleKey::ZeroCves,
        ToggleKey::Sbom,
        ToggleKey::PublishedTime,
        ToggleKey::DistributorName,
        ToggleKey::Favoriting,
        ToggleKey::Filtering,
        ToggleKey::HighlightsActive,
    ];

    pub const MASTER: ToggleKey = ToggleKey::NewSection;

    /// Keys that follow the master switch when it is flipped
    pub const MASTER_CHILDREN: [ToggleKey; 6] = [
        ToggleKey::FipsChips,
        ToggleKey::UpdatedTime,
        ToggleKey::ScannedTime,
        ToggleKey::VersionNumber,
        ToggleKey::ZeroCves,
        ToggleKey::Sbom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToggleKey::NewSection => "newSection",
            ToggleKey::FipsChips => "fipsChips",
            ToggleKey::UpdatedTime => "updatedTime",
            ToggleKey::ScannedTime => "scannedTime",
            ToggleKey::VersionNumber => "versionNumber",
            ToggleKey::ZeroCves => "zeroCVEs",
            ToggleKey::Sbom => "sbom",
            ToggleKey::PublishedTime => "publishedTime",
            ToggleKey::DistributorName => "distributorName",
            ToggleKey::Favoriting => "favoriting",
            ToggleKey::Filtering => "filtering",
            ToggleKey::HighlightsActive => "highlightsActive",
        }
    }

    /// Switch label in the control panel
    pub fn label(&self) -> &'static str {
        match self {
            ToggleKey::NewSection => "NEW",
            ToggleKey::FipsChips => "FIPS chips",
            ToggleKey::UpdatedTime => "Updated time",
            ToggleKey::ScannedTime => "Scanned time",
            ToggleKey::VersionNumber => "Version number",
            ToggleKey::ZeroCves => "Zero CVEs",
            ToggleKey::Sbom => "SBOM",
            ToggleKey::PublishedTime => "Published time",
            ToggleKey::DistributorName => "Distributor name",
            ToggleKey::Favoriting => "Favoriting",
            ToggleKey::Filtering => "Filtering",
            ToggleKey::HighlightsActive => "Highlights",
        }
    }

    pub fn is_master_child(&self) -> bool {
        Self::MASTER_CHILDREN.contains(self)
    }
}

impl std::str::FromStr for ToggleKey {
    type Err = String;

    /// Accepts camelCase, kebab-case and snake_case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        ToggleKey::ALL
            .into_iter()
            .find(|key| key.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = ToggleKey::ALL.iter().map(ToggleKey::name).collect();
                format!(
                    "Invalid toggle: {}. Known toggles: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

impl fmt::Display for ToggleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean flags controlling the optional UI sections.
///
/// Values are replaced wholesale: `with` returns a new mapping, so a reader
/// never observes a half-applied master cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataToggles {
    pub new_section: bool,
    pub fips_chips: bool,
    pub updated_time: bool,
    pub scanned_time: bool,
    pub version_number: bool,
    #[serde(rename = "zeroCVEs")]
    pub zero_cves: bool,
    pub sbom: bool,
    pub published_time: bool,
    pub distributor_name: bool,
    pub favoriting: bool,
    pub filtering: bool,
    pub highlights_active: bool,
}

impl Default for MetadataToggles {
    fn default() -> Self {
        Self {
            new_section: true,
            fips_chips: true,
            updated_time: true,
            scanned_time: true,
            version_number: true,
            zero_cves: true,
            sbom: true,
            published_time: true,
            distributor_name: true,
            favoriting: true,
            filtering: true,
            highlights_active: false,
        }
    }
}

impl MetadataToggles {
    pub fn get(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::NewSection => self.new_section,
            ToggleKey::FipsChips => self.fips_chips,
            ToggleKey::UpdatedTime => self.updated_time,
            ToggleKey::ScannedTime => self.scanned_time,
            ToggleKey::VersionNumber => self.version_number,
            ToggleKey::ZeroCves => self.zero_cves,
            ToggleKey::Sbom => self.sbom,
            ToggleKey::PublishedTime => self.published_time,
            ToggleKey::DistributorName => self.distributor_name,
            ToggleKey::Favoriting => self.favoriting,
            ToggleKey::Filtering => self.filtering,
            ToggleKey::HighlightsActive => self.highlights_active,
        }
    }

    fn slot_mut(&mut self, key: ToggleKey) -> &mut bool {
        match key {
            ToggleKey::NewSection => &mut self.new_section,
            ToggleKey::FipsChips => &mut self.fips_chips,
            ToggleKey::UpdatedTime => &mut self.updated_time,
            ToggleKey::ScannedTime => &mut self.scanned_time,
            ToggleKey::VersionNumber => &mut self.version_number,
            ToggleKey::ZeroCves => &mut self.zero_cves,
            ToggleKey::Sbom => &mut self.sbom,
            ToggleKey::PublishedTime => &mut self.published_time,
            ToggleKey::DistributorName => &mut self.distributor_name,
            ToggleKey::Favoriting => &mut self.favoriting,
            ToggleKey::Filtering => &mut self.filtering,
            ToggleKey::HighlightsActive => &mut self.highlights_active,
        }
    }

    /// Returns the mapping with `key` set to `value`.
    ///
    /// Setting the master key also sets every master child. Setting a child
    /// leaves the master untouched.
    pub fn with(mut self, key: ToggleKey, value: bool) -> Self {
        *self.slot_mut(key) = value;
        if key == ToggleKey::MASTER {
            for child in ToggleKey::MASTER_CHILDREN {
                *self.slot_mut(child) = value;
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToggleKey, bool)> + '_ {
        ToggleKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_all_on_except_highlights() {
        let toggles = MetadataToggles::default();
        for (key, value) in toggles.iter() {
            assert_eq!(value, key != ToggleKey::HighlightsActive, "{}", key);
        }
    }

    #[test]
    fn test_master_off_cascades_to_children() {
        let toggles = MetadataToggles::default().with(ToggleKey::NewSection, false);
        assert!(!toggles.new_section);
        for child in ToggleKey::MASTER_CHILDREN {
            assert!(!toggles.get(child), "{} should follow master", child);
        }
        assert!(toggles.published_time);
        assert!(toggles.distributor_name);
        assert!(toggles.filtering);
    }

    #[test]
    fn test_master_on_cascades_to_children() {
        let toggles = MetadataToggles::default()
            .with(ToggleKey::NewSection, false)
            .with(ToggleKey::NewSection, true);
        for child in ToggleKey::MASTER_CHILDREN {
            assert!(toggles.get(child));
        }
    }

    #[test]
    fn test_child_change_does_not_touch_master() {
        let toggles = MetadataToggles::default()
            .with(ToggleKey::NewSection, false)
            .with(ToggleKey::Sbom, true);
        assert!(!toggles.new_section);
        assert!(toggles.sbom);
        assert!(!toggles.zero_cves);
    }

    #[test]
    fn test_highlights_is_not_a_master_child() {
        let toggles = MetadataToggles::default().with(ToggleKey::NewSection, true);
        assert!(!toggles.highlights_active);
        assert!(!ToggleKey::HighlightsActive.is_master_child());
    }

    #[test]
    fn test_toggle_key_from_str_spellings() {
        assert_eq!(ToggleKey::from_str("zeroCVEs").unwrap(), ToggleKey::ZeroCves);
        assert_eq!(ToggleKey::from_str("zero-cves").unwrap(), ToggleKey::ZeroCves);
        assert_eq!(
            ToggleKey::from_str("new_section").unwrap(),
            ToggleKey::NewSection
        );
        assert_eq!(
            ToggleKey::from_str("HighlightsActive").unwrap(),
            ToggleKey::HighlightsActive
        );
    }

    #[test]
    fn test_toggle_key_from_str_invalid() {
        let error = ToggleKey::from_str("darkMode").unwrap_err();
        assert!(error.contains("Invalid toggle: darkMode"));
        assert!(error.contains("newSection"));
    }

    #[test]
    fn test_serialized_names_match_key_names() {
        let json = serde_json::to_value(MetadataToggles::default()).unwrap();
        for key in ToggleKey::ALL {
            assert!(json.get(key.name()).is_some(), "missing {}", key.name());
        }
        assert_eq!(
            serde_json::to_string(&ToggleKey::ZeroCves).unwrap(),
            "\"zeroCVEs\""
        );
    }
}
