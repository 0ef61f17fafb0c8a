//! Builds the detail page read model
//!
//! Header facts, the CVE panel, sections and jump links are all derived
//! from one toggle snapshot, so they can never disagree with each other.

use super::item_detail_view::{
    ConfigurationView, CvePanelView, HeaderFact, ItemDetailView, JumpLinkView, SectionView,
};
use crate::application::state::scanned_label;
use crate::catalog::domain::{
    ComplianceLevel, ImageConfiguration, ImageProfile, IncludeOption, MetadataToggles,
    SoftwareItem, ToggleKey,
};
use crate::catalog::services::{
    image_reference, pull_commands, DetailSection, SectionLayout, SectionTracker,
};

/// Inputs of one detail page render
pub struct DetailContext<'a> {
    pub item: &'a SoftwareItem,
    pub profile: &'a ImageProfile,
    pub configuration: &'a ImageConfiguration,
    pub toggles: &'a MetadataToggles,
    pub tracker: &'a SectionTracker,
    pub tag_search: &'a str,
    pub scanned_minutes: u64,
}

pub struct ItemDetailBuilder;

impl ItemDetailBuilder {
    pub fn build(ctx: &DetailContext<'_>) -> ItemDetailView {
        let layout = SectionLayout::for_toggles(ctx.toggles);
        let reference = image_reference(ctx.profile.base_name(), ctx.configuration);
        let active = ctx.tracker.active();

        ItemDetailView {
            id: ctx.item.id().to_string(),
            name: ctx.item.name().to_string(),
            description: ctx.item.description().to_string(),
            logo: ctx.item.logo().to_string(),
            tags: ctx.item.tags().to_vec(),
            image: ctx.configuration.image_name(ctx.profile.base_name()),
            facts: Self::build_facts(ctx),
            cve_panel: ctx.toggles.zero_cves.then(|| CvePanelView {
                counts: ctx.profile.cve_counts(),
                total: ctx.profile.cve_counts().total(),
                scanned: scanned_label(ctx.scanned_minutes),
                highlighted: ctx.toggles.highlights_active,
            }),
            upstream_url: ctx.profile.upstream_url().map(str::to_string),
            configuration: Self::build_configuration(ctx),
            tag_search: ctx.tag_search.to_string(),
            tag_options: ctx
                .profile
                .search_tags(ctx.tag_search)
                .into_iter()
                .cloned()
                .collect(),
            pull_commands: pull_commands(ctx.profile.base_name(), ctx.configuration)
                .iter()
                .map(ToString::to_string)
                .collect(),
            sections: layout
                .sections()
                .iter()
                .map(|section| SectionView {
                    id: section.id().to_string(),
                    title: section.title().to_string(),
                    body: Self::section_body(*section, ctx, &reference),
                    highlighted: ctx.toggles.highlights_active && section.gate().is_some(),
                })
                .collect(),
            jump_links: layout
                .sections()
                .iter()
                .map(|section| JumpLinkView {
                    id: section.id().to_string(),
                    title: section.title().to_string(),
                    active: active == Some(*section),
                })
                .collect(),
            active_section: active.map(|section| section.id().to_string()),
            image_reference: reference,
        }
    }

    fn build_facts(ctx: &DetailContext<'_>) -> Vec<HeaderFact> {
        let toggles = ctx.toggles;
        let candidates = [
            (ToggleKey::VersionNumber, "Version", Some(ctx.profile.version())),
            (ToggleKey::FipsChips, "FIPS", ctx.profile.fips_status()),
            (ToggleKey::DistributorName, "Provided by", Some(ctx.item.provider())),
            (ToggleKey::PublishedTime, "Published", Some(ctx.item.published())),
            (ToggleKey::UpdatedTime, "Updated", Some(ctx.profile.updated())),
            (ToggleKey::ScannedTime, "Scanned", Some(ctx.profile.scanned())),
        ];

        candidates
            .into_iter()
            .filter(|(key, _, _)| toggles.get(*key))
            .filter_map(|(key, label, value)| {
                let value = value.filter(|v| !v.is_empty())?;
                Some(HeaderFact {
                    key,
                    label: label.to_string(),
                    value: value.to_string(),
                    highlighted: toggles.highlights_active && key.is_master_child(),
                })
            })
            .collect()
    }

    fn build_configuration(ctx: &DetailContext<'_>) -> ConfigurationView {
        let config = ctx.configuration;
        let selected = ctx.profile.tag(config.tag());
        ConfigurationView {
            tag: config.tag().value().to_string(),
            tag_label: selected
                .map(|option| option.label.clone())
                .unwrap_or_else(|| config.tag().label().to_string()),
            last_published: selected.and_then(|option| option.last_published.clone()),
            compliance: config.compliance(),
            package_manager: config.includes(IncludeOption::PackageManager),
            shell: config.includes(IncludeOption::Shell),
            toolchain: config.includes(IncludeOption::Toolchain),
            options_enabled: config.options_enabled(),
        }
    }

    fn section_body(section: DetailSection, ctx: &DetailContext<'_>, reference: &str) -> Vec<String> {
        let profile = ctx.profile;
        match section {
            DetailSection::StartUsing => {
                let mut body: Vec<String> = pull_commands(profile.base_name(), ctx.configuration)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                body.push("Compressed size: 1.3MB".to_string());
                body.push("Architecture: aarch64, arm64, x86_64".to_string());
                body
            }
            DetailSection::Migration => vec![
                format!("Update the FROM statement to use {}", reference),
                "Change any apk package manager commands to dnf".to_string(),
                "Set USER to 1001".to_string(),
                "Add WORKDIR /app and set ownership with 'chown -R 1001:1001 /app'".to_string(),
                "Ensure cache directories are writable by creating them and setting ownership to 1001:1001".to_string(),
            ],
            DetailSection::Compatibility => vec![
                "Compatible with Red Hat OpenShift Container Platform, Kubernetes, and other container orchestration platforms.".to_string(),
            ],
            DetailSection::License => vec!["Apache License 2.0".to_string()],
            DetailSection::Architecture => vec!["amd64, arm64, s390x, ppc64le".to_string()],
            DetailSection::Containerfile => {
                vec!["View the Containerfile used to build this image.".to_string()]
            }
            DetailSection::Comparison => {
                vec!["Compare this image with other versions or similar images.".to_string()]
            }
            DetailSection::LatestUpdate => {
                let mut body = vec![format!("Version {}", profile.version())];
                if ctx.toggles.updated_time && !profile.updated().is_empty() {
                    body.push(format!("Updated {}", profile.updated()));
                }
                body
            }
            DetailSection::Tags => profile
                .tags()
                .iter()
                .map(|option| match &option.last_published {
                    Some(published) => format!(":{} ({})", option.value, published),
                    None => format!(":{}", option.value),
                })
                .collect(),
            DetailSection::ImageVariants => [
                ComplianceLevel::None,
                ComplianceLevel::FipsStig,
                ComplianceLevel::Cis,
            ]
            .into_iter()
            .map(|level| {
                format!(
                    "{}: {}{}",
                    level.label(),
                    profile.base_name(),
                    level.image_suffix()
                )
            })
            .collect(),
            DetailSection::Cves => {
                let counts = profile.cve_counts();
                vec![
                    scanned_label(ctx.scanned_minutes),
                    format!("Critical: {}", counts.critical),
                    format!("High: {}", counts.high),
                    format!("Medium: {}", counts.medium),
                    format!("Low: {}", counts.low),
                ]
            }
            DetailSection::Sbom => vec![format!(
                "Download the software bill of materials for {}",
                reference
            )],
            DetailSection::Cosign => vec![
                "Verify the image signature using Cosign:".to_string(),
                format!("cosign verify {}", reference),
            ],
            DetailSection::Fips => {
                let mut body = Vec::new();
                if let Some(status) = profile.fips_status() {
                    body.push(status.to_string());
                }
                body.push(
                    "This image includes FIPS 140-2 validated cryptographic modules.".to_string(),
                );
                body
            }
            DetailSection::Stig => vec![
                "Security Technical Implementation Guide (STIG) compliance information."
                    .to_string(),
            ],
        }
    }
}
