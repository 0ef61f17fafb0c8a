use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A filter dimension of the catalog sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    Type,
    DeploymentMethod,
    Provider,
    Category,
    Compatibility,
    Platform,
    CertificationLevel,
    InfrastructureFeature,
    CertifiedFor,
}

impl Facet {
    /// Every facet in sidebar order
    pub const ALL: [Facet; 9] = [
        Facet::Type,
        Facet::DeploymentMethod,
        Facet::Provider,
        Facet::Category,
        Facet::Compatibility,
        Facet::Platform,
        Facet::CertificationLevel,
        Facet::InfrastructureFeature,
        Facet::CertifiedFor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Type => "Type",
            Facet::DeploymentMethod => "Deployment method",
            Facet::Provider => "Provider",
            Facet::Category => "Category",
            Facet::Compatibility => "Compatibility",
            Facet::Platform => "Platform",
            Facet::CertificationLevel => "Certification level",
            Facet::InfrastructureFeature => "Infrastructure feature",
            Facet::CertifiedFor => "Certified for",
        }
    }

    /// Facets whose option list can be narrowed with a free-text search
    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Facet::Provider | Facet::Category | Facet::CertifiedFor
        )
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that can report its values for a facet.
///
/// The filter predicate only talks to this trait, so wiring a new facet to
/// real item data is a matter of returning values here.
pub trait FacetValues {
    fn facet_values(&self, facet: Facet) -> Vec<&str>;
}

/// The option list offered for each facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    options: BTreeMap<Facet, Vec<String>>,
}

impl FacetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options of a facet, dropping duplicates while keeping order
    pub fn with<I, S>(mut self, facet: Facet, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for option in options {
            let option = option.into();
            if !unique.contains(&option) {
                unique.push(option);
            }
        }
        self.options.insert(facet, unique);
        self
    }

    pub fn options(&self, facet: Facet) -> &[String] {
        self.options.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn offers(&self, facet: Facet, value: &str) -> bool {
        self.options(facet).iter().any(|option| option == value)
    }

    /// Options of `facet` containing `query`, case-insensitively.
    /// An empty query offers every option.
    pub fn search(&self, facet: Facet, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.options(facet)
            .iter()
            .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
