use crate::catalog::domain::{MetadataToggles, ToggleKey};
use serde::Serialize;
use std::fmt;

/// A content section of the item detail page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailSection {
    StartUsing,
    Migration,
    Compatibility,
    License,
    Architecture,
    Containerfile,
    Comparison,
    LatestUpdate,
    Tags,
    ImageVariants,
    Cves,
    Sbom,
    Cosign,
    Fips,
    Stig,
}

impl DetailSection {
    pub const ALL: [DetailSection; 15] = [
        DetailSection::StartUsing,
        DetailSection::Migration,
        DetailSection::Compatibility,
        DetailSection::License,
        DetailSection::Architecture,
        DetailSection::Containerfile,
        DetailSection::Comparison,
        DetailSection::LatestUpdate,
        DetailSection::Tags,
        DetailSection::ImageVariants,
        DetailSection::Cves,
        DetailSection::Sbom,
        DetailSection::Cosign,
        DetailSection::Fips,
        DetailSection::Stig,
    ];

    /// Anchor id used by the jump links
    pub fn id(&self) -> &'static str {
        match self {
            DetailSection::StartUsing => "start-using",
            DetailSection::Migration => "migration",
            DetailSection::Compatibility => "compatibility",
            DetailSection::License => "license",
            DetailSection::Architecture => "architecture",
            DetailSection::Containerfile => "containerfile",
            DetailSection::Comparison => "comparison",
            DetailSection::LatestUpdate => "latest-update",
            DetailSection::Tags => "tags",
            DetailSection::ImageVariants => "image-variants",
            DetailSection::Cves => "cves",
            DetailSection::Sbom => "sbom",
            DetailSection::Cosign => "cosign",
            DetailSection::Fips => "fips",
            DetailSection::Stig => "stig",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DetailSection::StartUsing => "Start using this image",
            DetailSection::Migration => "Migration steps",
            DetailSection::Compatibility => "Compatibility",
            DetailSection::License => "License",
            DetailSection::Architecture => "Architecture",
            DetailSection::Containerfile => "Containerfile",
            DetailSection::Comparison => "Image Comparison",
            DetailSection::LatestUpdate => "Latest Update",
            DetailSection::Tags => "Tags",
            DetailSection::ImageVariants => "Image Variants",
            DetailSection::Cves => "CVE Status",
            DetailSection::Sbom => "SBOM",
            DetailSection::Cosign => "Cosign",
            DetailSection::Fips => "FIPS",
            DetailSection::Stig => "STIG",
        }
    }

    /// Toggle that must be on for the section to be shown
    pub fn gate(&self) -> Option<ToggleKey> {
        match self {
            DetailSection::Cves => Some(ToggleKey::ZeroCves),
            DetailSection::Sbom => Some(ToggleKey::Sbom),
            DetailSection::Fips => Some(ToggleKey::FipsChips),
            _ => None,
        }
    }

    pub fn is_visible(&self, toggles: &MetadataToggles) -> bool {
        self.gate().map_or(true, |key| toggles.get(key))
    }
}

impl std::str::FromStr for DetailSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DetailSection::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| format!("Invalid section: {}", s))
    }
}

impl fmt::Display for DetailSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The sections visible for a toggle snapshot. Jump links are built from
/// the same list, so a link never points at a hidden section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    sections: Vec<DetailSection>,
}

impl SectionLayout {
    pub fn for_toggles(toggles: &MetadataToggles) -> Self {
        Self {
            sections: DetailSection::ALL
                .into_iter()
                .filter(|section| section.is_visible(toggles))
                .collect(),
        }
    }

    pub fn sections(&self) -> &[DetailSection] {
        &self.sections
    }

    pub fn contains(&self, section: DetailSection) -> bool {
        self.sections.contains(&section)
    }
}

/// Tracks which jump link is highlighted as the reader scrolls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<DetailSection>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `section` active if it is part of `layout`. Returns false and
    /// keeps the current state otherwise.
    pub fn observe(&mut self, layout: &SectionLayout, section: DetailSection) -> bool {
        if !layout.contains(section) {
            return false;
        }
        self.active = Some(section);
        true
    }

    /// Drops the active section when a toggle change has hidden it
    pub fn reconcile(&mut self, layout: &SectionLayout) {
        if self.active.is_some_and(|section| !layout.contains(section)) {
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<DetailSection> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_sections_visible_by_default() {
        let layout = SectionLayout::for_toggles(&MetadataToggles::default());
        assert_eq!(layout.sections(), DetailSection::ALL);
    }

    #[test]
    fn test_gated_sections_follow_their_toggles() {
        let toggles = MetadataToggles::default()
            .with(ToggleKey::ZeroCves, false)
            .with(ToggleKey::Sbom, false);
        let layout = SectionLayout::for_toggles(&toggles);
        assert!(!layout.contains(DetailSection::Cves));
        assert!(!layout.contains(DetailSection::Sbom));
        assert!(layout.contains(DetailSection::Fips));
        assert_eq!(layout.sections().len(), 13);
    }

    #[test]
    fn test_master_off_hides_every_gated_section() {
        let toggles = MetadataToggles::default().with(ToggleKey::NewSection, false);
        let layout = SectionLayout::for_toggles(&toggles);
        for section in [DetailSection::Cves, DetailSection::Sbom, DetailSection::Fips] {
            assert!(!layout.contains(section));
        }
        assert!(layout.contains(DetailSection::Stig));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let ids: Vec<&str> = DetailSection::ALL.iter().map(DetailSection::id).collect();
        assert_eq!(ids.first(), Some(&"start-using"));
        assert_eq!(ids.last(), Some(&"stig"));
        let cves = ids.iter().position(|id| *id == "cves").unwrap();
        let sbom = ids.iter().position(|id| *id == "sbom").unwrap();
        assert!(cves < sbom);
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!(
            DetailSection::from_str("image-variants").unwrap(),
            DetailSection::ImageVariants
        );
        assert!(DetailSection::from_str("pricing").is_err());
    }

    #[test]
    fn test_tracker_ignores_hidden_sections() {
        let toggles = MetadataToggles::default().with(ToggleKey::ZeroCves, false);
        let layout = SectionLayout::for_toggles(&toggles);
        let mut tracker = SectionTracker::new();
        assert!(tracker.observe(&layout, DetailSection::Tags));
        assert!(!tracker.observe(&layout, DetailSection::Cves));
        assert_eq!(tracker.active(), Some(DetailSection::Tags));
    }

    #[test]
    fn test_tracker_clears_when_active_section_is_hidden() {
        let mut tracker = SectionTracker::new();
        let full = SectionLayout::for_toggles(&MetadataToggles::default());
        tracker.observe(&full, DetailSection::Sbom);

        let hidden = SectionLayout::for_toggles(
            &MetadataToggles::default().with(ToggleKey::Sbom, false),
        );
        tracker.reconcile(&hidden);
        assert_eq!(tracker.active(), None);
    }
}
