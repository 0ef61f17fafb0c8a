use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{DetailRequest, ListRequest, OutputFormat};
use crate::catalog::domain::{
    ComplianceLevel, Facet, ImageTag, IncludeOption, PageSize, SortKey, ToggleKey, ViewMode,
};
use crate::catalog::services::DetailSection;

/// A `KEY=BOOL` toggle override, e.g. `newSection=false`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOverride {
    pub key: ToggleKey,
    pub value: bool,
}

impl std::str::FromStr for ToggleOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid toggle override: {}. Expected KEY=true|false", s))?;
        let key = key.trim().parse::<ToggleKey>()?;
        let value = match value.trim().to_lowercase().as_str() {
            "true" | "on" | "1" => true,
            "false" | "off" | "0" => false,
            other => {
                return Err(format!(
                    "Invalid toggle value: {}. Please specify 'true' or 'false'",
                    other
                ))
            }
        };
        Ok(Self { key, value })
    }
}

/// Browse the Hummingbird catalog prototype from the terminal
#[derive(Parser, Debug)]
#[command(name = "hummingbird")]
#[command(version)]
#[command(about = "Browse the Hummingbird catalog prototype from the terminal", long_about = None)]
pub struct Args {
    /// Output format: markdown or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./hummingbird.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override a feature toggle. Can be specified multiple times:
    /// -t newSection=false -t sbom=true
    #[arg(short, long = "toggle", value_name = "KEY=BOOL", global = true)]
    pub toggles: Vec<ToggleOverride>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a page of the filtered, sorted catalog
    List(ListArgs),
    /// Show the detail page of one catalog item
    Detail(DetailArgs),
    /// Show the feature-toggle control panel
    Toggles(TogglesArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct ListArgs {
    /// Select a type option (repeatable)
    #[arg(long = "type", value_name = "OPTION")]
    pub types: Vec<String>,

    /// Select a deployment option (repeatable)
    #[arg(long = "deployment", value_name = "OPTION")]
    pub deployments: Vec<String>,

    /// Select a provider option (repeatable)
    #[arg(long = "provider", value_name = "OPTION")]
    pub providers: Vec<String>,

    /// Select a category option (repeatable)
    #[arg(long = "category", value_name = "OPTION")]
    pub categories: Vec<String>,

    /// Select a compatibility option (repeatable)
    #[arg(long = "compatibility", value_name = "OPTION")]
    pub compatibility: Vec<String>,

    /// Select a platform option (repeatable)
    #[arg(long = "platform", value_name = "OPTION")]
    pub platforms: Vec<String>,

    /// Select a certification option (repeatable)
    #[arg(long = "certification", value_name = "OPTION")]
    pub certifications: Vec<String>,

    /// Select an infrastructure option (repeatable)
    #[arg(long = "infrastructure", value_name = "OPTION")]
    pub infrastructure: Vec<String>,

    /// Select a certified-for option (repeatable)
    #[arg(long = "certified-for", value_name = "OPTION")]
    pub certified_for: Vec<String>,

    /// Narrow the provider option list
    #[arg(long, value_name = "TEXT")]
    pub provider_search: Option<String>,

    /// Narrow the category option list
    #[arg(long, value_name = "TEXT")]
    pub category_search: Option<String>,

    /// Narrow the certified-for option list
    #[arg(long, value_name = "TEXT")]
    pub certified_for_search: Option<String>,

    /// Sort order: relevance, name or date
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Card layout: list or grid
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page: 20, 50 or 100
    #[arg(long)]
    pub per_page: Option<PageSize>,
}

impl ListArgs {
    /// Builds the request; `sort`, `view` and `per_page` fall back to the
    /// given defaults when not passed on the command line.
    pub fn to_request(&self, page_size: PageSize, sort: SortKey, view: ViewMode) -> ListRequest {
        let mut request = ListRequest::new()
            .page(self.page)
            .page_size(self.per_page.unwrap_or(page_size))
            .sort(self.sort.unwrap_or(sort))
            .view_mode(self.view.unwrap_or(view));

        for (facet, values) in self.selections() {
            for value in values {
                request = request.select(facet, value.clone());
            }
        }

        let searches = [
            (Facet::Provider, &self.provider_search),
            (Facet::Category, &self.category_search),
            (Facet::CertifiedFor, &self.certified_for_search),
        ];
        for (facet, text) in searches {
            if let Some(text) = text {
                request = request.search(facet, text.clone());
            }
        }

        request
    }

    fn selections(&self) -> [(Facet, &Vec<String>); 9] {
        [
            (Facet::Type, &self.types),
            (Facet::DeploymentMethod, &self.deployments),
            (Facet::Provider, &self.providers),
            (Facet::Category, &self.categories),
            (Facet::Compatibility, &self.compatibility),
            (Facet::Platform, &self.platforms),
            (Facet::CertificationLevel, &self.certifications),
            (Facet::InfrastructureFeature, &self.infrastructure),
            (Facet::CertifiedFor, &self.certified_for),
        ]
    }
}

#[derive(ClapArgs, Debug)]
pub struct DetailArgs {
    /// Item id, name or slug (e.g. 6 or prometheus-monitoring)
    pub item: String,

    /// Image tag: latest, latest-builder or a version
    #[arg(long)]
    pub tag: Option<ImageTag>,

    /// Compliance level: none, fips-stig or cis
    #[arg(long)]
    pub compliance: Option<ComplianceLevel>,

    /// Switch an image option on: package-manager, shell or toolchain
    #[arg(long = "include", value_name = "OPTION")]
    pub includes: Vec<IncludeOption>,

    /// Switch an image option off
    #[arg(long = "omit", value_name = "OPTION")]
    pub omits: Vec<IncludeOption>,

    /// Section scrolled into view (marks its jump link active)
    #[arg(long)]
    pub section: Option<DetailSection>,

    /// Filter the tag picker
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub tag_search: String,

    /// Keep the page mounted and re-render it on N scan ticks
    #[arg(long, value_name = "N")]
    pub watch: Option<u64>,

    /// Seconds per scan tick (overrides scan_interval_seconds)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_seconds: Option<u64>,
}

impl DetailArgs {
    pub fn to_request(&self) -> DetailRequest {
        let mut request = DetailRequest::new(self.item.clone()).tag_search(self.tag_search.clone());
        if let Some(tag) = &self.tag {
            request = request.tag(tag.clone());
        }
        if let Some(compliance) = self.compliance {
            request = request.compliance(compliance);
        }
        for option in &self.includes {
            request = request.include(*option);
        }
        for option in &self.omits {
            request = request.omit(*option);
        }
        if let Some(section) = self.section {
            request = request.section(section);
        }
        request
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct TogglesArgs {
    /// Show the detail-page panel, including Zero CVEs and SBOM
    #[arg(long)]
    pub detail: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
