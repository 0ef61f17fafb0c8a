use crate::catalog::domain::{
    CveCounts, Facet, FacetOptions, ImageProfile, ImageTag, ItemCollection, ItemId, SoftwareItem,
    TagOption,
};
use crate::ports::outbound::CatalogRepository;
use crate::shared::Result;

/// Version every fixture image is currently published at
const CURRENT_VERSION: &str = "1.1.0";

struct FixtureItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    logo: &'static str,
    tags: [&'static str; 2],
    provider: &'static str,
    published: &'static str,
    upstream_url: &'static str,
}

static ITEMS: [FixtureItem; 6] = [
    FixtureItem {
        id: "1",
        name: "ScaleOps Platform",
        description: "All-in-one resource management and optimization platform for Kubernetes",
        logo: "🟣",
        tags: ["Containerized application", "DevOps"],
        provider: "ScaleOps - Cloud-Native Optimization",
        published: "5 minutes ago",
        upstream_url: "https://scaleops.com",
    },
    FixtureItem {
        id: "2",
        name: "LINSTOR",
        description: "LINSTOR® is open-source software designed to manage block storage devices for large Linux server clusters.",
        logo: "🟠",
        tags: ["Containerized application", "Storage"],
        provider: "LINBIT USA, LLC",
        published: "18 minutes ago",
        upstream_url: "https://github.com/LINBIT/linstor-server",
    },
    FixtureItem {
        id: "3",
        name: "OpenShift Windows Machine Config Operator",
        description: "Windows Machine Config Operator is an operator providing the ability to run Windows compute nodes in an OpenShift Container Platform cluster.",
        logo: "🔴",
        tags: ["Containerized application", "OS & platforms"],
        provider: "Red Hat",
        published: "1 hour ago",
        upstream_url: "https://github.com/openshift/windows-machine-config-operator",
    },
    FixtureItem {
        id: "4",
        name: "Prisma Cloud Enterprise Edition",
        description: "Cloud Native Application Protection Platform by Palo Alto Networks",
        logo: "🔵",
        tags: ["Containerized application", "Security"],
        provider: "Palo Alto Networks Inc.",
        published: "2 hours ago",
        upstream_url: "https://www.paloaltonetworks.com/prisma/cloud",
    },
    FixtureItem {
        id: "5",
        name: "Kubernetes Operator Framework",
        description: "A framework for building Kubernetes operators",
        logo: "⚪",
        tags: ["Containerized application", "DevOps"],
        provider: "CNCF",
        published: "3 hours ago",
        upstream_url: "https://github.com/operator-framework",
    },
    FixtureItem {
        id: "6",
        name: "Prometheus Monitoring",
        description: "Open-source systems monitoring and alerting toolkit",
        logo: "🔴",
        tags: ["Containerized application", "Monitoring"],
        provider: "Prometheus",
        published: "4 hours ago",
        upstream_url: "https://github.com/prometheus/prometheus",
    },
];

const TYPE_OPTIONS: [&str; 2] = ["Standalone application", "Containerized application"];

const DEPLOYMENT_OPTIONS: [&str; 2] = ["Helm chart", "Operator"];

/// Sidebar providers, followed by the providers of the fixture items so
/// that every listing can be reached through the provider filter
const PROVIDER_OPTIONS: [&str; 14] = [
    "21 Analytics AG",
    "6WIND",
    "6fusion",
    "A10 Networks",
    "A5g Networks, Inc.",
    "AI EdgeLabs",
    "AMDOCS",
    "ATS",
    "ScaleOps - Cloud-Native Optimization",
    "LINBIT USA, LLC",
    "Red Hat",
    "Palo Alto Networks Inc.",
    "CNCF",
    "Prometheus",
];

const CATEGORY_OPTIONS: [&str; 8] = [
    "AI/ML",
    "Database",
    "DevOps",
    "Monitoring",
    "Networking",
    "OS & platforms",
    "Security",
    "Storage",
];

const COMPATIBILITY_OPTIONS: [&str; 3] = ["OpenShift 4.16", "OpenShift 4.17", "Kubernetes"];

const PLATFORM_OPTIONS: [&str; 4] = ["x86_64", "aarch64", "ppc64le", "s390x"];

const CERTIFICATION_OPTIONS: [&str; 3] = ["Red Hat certified", "Partner validated", "Community"];

const INFRASTRUCTURE_OPTIONS: [&str; 4] =
    ["Disconnected", "FIPS mode", "Proxy-aware", "Tokenized auth"];

const CERTIFIED_FOR_OPTIONS: [&str; 3] = [
    "Red Hat OpenShift",
    "Red Hat Enterprise Linux",
    "Red Hat OpenStack Platform",
];

/// FixtureCatalogRepository adapter serving the built-in demo catalog
///
/// All data is static and local to the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogRepository;

impl FixtureCatalogRepository {
    pub fn new() -> Self {
        Self
    }

    fn fixture(item: &SoftwareItem) -> Option<&'static FixtureItem> {
        ITEMS.iter().find(|fixture| fixture.id == item.id().as_str())
    }

    fn tag_catalog() -> Vec<TagOption> {
        vec![
            TagOption::new(ImageTag::Latest).with_last_published("2 days ago"),
            TagOption::new(ImageTag::LatestBuilder).with_last_published("2 days ago"),
            TagOption::new(ImageTag::Version(CURRENT_VERSION.to_string()))
                .with_last_published("1 week ago"),
            TagOption::new(ImageTag::Version("1.0.0".to_string()))
                .with_last_published("3 weeks ago"),
        ]
    }
}

impl CatalogRepository for FixtureCatalogRepository {
    fn list_items(&self) -> Result<ItemCollection> {
        let items = ITEMS
            .iter()
            .map(|fixture| {
                Ok(SoftwareItem::new(ItemId::new(fixture.id)?, fixture.name)
                    .with_description(fixture.description)
                    .with_logo(fixture.logo)
                    .with_tags(fixture.tags)
                    .with_provider(fixture.provider)
                    .with_published(fixture.published))
            })
            .collect::<Result<Vec<_>>>()?;
        ItemCollection::new(items)
    }

    fn facet_options(&self) -> FacetOptions {
        FacetOptions::new()
            .with(Facet::Type, TYPE_OPTIONS)
            .with(Facet::DeploymentMethod, DEPLOYMENT_OPTIONS)
            .with(Facet::Provider, PROVIDER_OPTIONS)
            .with(Facet::Category, CATEGORY_OPTIONS)
            .with(Facet::Compatibility, COMPATIBILITY_OPTIONS)
            .with(Facet::Platform, PLATFORM_OPTIONS)
            .with(Facet::CertificationLevel, CERTIFICATION_OPTIONS)
            .with(Facet::InfrastructureFeature, INFRASTRUCTURE_OPTIONS)
            .with(Facet::CertifiedFor, CERTIFIED_FOR_OPTIONS)
    }

    fn image_profile(&self, item: &SoftwareItem) -> Result<ImageProfile> {
        let mut profile = ImageProfile::new(item.slug(), CURRENT_VERSION)
            .with_tags(Self::tag_catalog())
            .with_fips_status("FIPS available")
            .with_updated("2 minutes ago")
            .with_scanned("1 minute ago")
            .with_cve_counts(CveCounts::default());
        if let Some(fixture) = Self::fixture(item) {
            profile = profile.with_upstream_url(fixture.upstream_url);
        }
        Ok(profile)
    }
}
