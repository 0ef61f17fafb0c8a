use serde::Serialize;
use std::fmt;

const LATEST: &str = "latest";
const LATEST_BUILDER: &str = "latest-builder";

/// Prefix added to the tag when the toolchain variant is requested
pub const TOOLCHAIN_TAG_PREFIX: &str = "go-";

/// A published image tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageTag {
    Latest,
    LatestBuilder,
    Version(String),
}

impl ImageTag {
    pub fn value(&self) -> &str {
        match self {
            ImageTag::Latest => LATEST,
            ImageTag::LatestBuilder => LATEST_BUILDER,
            ImageTag::Version(version) => version,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ImageTag::Latest => "Latest",
            ImageTag::LatestBuilder => "Latest builder",
            ImageTag::Version(version) => version,
        }
    }

    pub fn state(&self) -> TagState {
        match self {
            ImageTag::Latest => TagState::Default,
            ImageTag::LatestBuilder => TagState::Builder,
            ImageTag::Version(_) => TagState::Pinned,
        }
    }
}

impl std::str::FromStr for ImageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Invalid tag: tag cannot be empty".to_string()),
            LATEST => Ok(ImageTag::Latest),
            LATEST_BUILDER => Ok(ImageTag::LatestBuilder),
            version => Ok(ImageTag::Version(version.to_string())),
        }
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for ImageTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// The states of the tag/include-flag coupling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    /// On `latest`; turning an include flag on promotes to builder
    Default,
    /// On `latest-builder`; clearing both include flags demotes to default
    Builder,
    /// On a version tag; the configuration options are disabled
    Pinned,
}

/// Security compliance variant of the image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceLevel {
    #[default]
    None,
    FipsStig,
    Cis,
}

impl ComplianceLevel {
    /// Suffix appended to the image name for this variant
    pub fn image_suffix(&self) -> &'static str {
        match self {
            ComplianceLevel::FipsStig => "-fips",
            ComplianceLevel::None | ComplianceLevel::Cis => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceLevel::None => "None",
            ComplianceLevel::FipsStig => "FIPS and STIG",
            ComplianceLevel::Cis => "CIS Compliance",
        }
    }
}

impl std::str::FromStr for ComplianceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ComplianceLevel::None),
            "fips-stig" | "fips" => Ok(ComplianceLevel::FipsStig),
            "cis" => Ok(ComplianceLevel::Cis),
            _ => Err(format!(
                "Invalid compliance level: {}. Please specify 'none', 'fips-stig' or 'cis'",
                s
            )),
        }
    }
}

/// Optional content that can be included in the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeOption {
    PackageManager,
    Shell,
    Toolchain,
}

impl std::str::FromStr for IncludeOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "package-manager" | "package_manager" | "pm" => Ok(IncludeOption::PackageManager),
            "shell" => Ok(IncludeOption::Shell),
            "toolchain" | "go-tools" | "go" => Ok(IncludeOption::Toolchain),
            _ => Err(format!(
                "Invalid include option: {}. Please specify 'package-manager', 'shell' or 'toolchain'",
                s
            )),
        }
    }
}

/// The image a user is about to pull: tag, compliance variant and extras.
///
/// The tag and the package-manager/shell flags are coupled: selecting the
/// builder tag turns both flags on, selecting `latest` turns both off,
/// turning a flag on while on `latest` moves to the builder tag, and turning
/// the last remaining flag off while on the builder tag moves back to
/// `latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfiguration {
    tag: ImageTag,
    compliance: ComplianceLevel,
    package_manager: bool,
    shell: bool,
    toolchain: bool,
}

impl Default for ImageConfiguration {
    fn default() -> Self {
        Self {
            tag: ImageTag::Latest,
            compliance: ComplianceLevel::None,
            package_manager: false,
            shell: false,
            toolchain: false,
        }
    }
}

impl ImageConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self) -> &ImageTag {
        &self.tag
    }

    pub fn compliance(&self) -> ComplianceLevel {
        self.compliance
    }

    pub fn includes(&self, option: IncludeOption) -> bool {
        match option {
            IncludeOption::PackageManager => self.package_manager,
            IncludeOption::Shell => self.shell,
            IncludeOption::Toolchain => self.toolchain,
        }
    }

    /// Options can only be changed on the `latest` and `latest-builder` tags
    pub fn options_enabled(&self) -> bool {
        self.tag.state() != TagState::Pinned
    }

    pub fn select_tag(&mut self, tag: ImageTag) {
        match tag.state() {
            TagState::Builder => {
                self.package_manager = true;
                self.shell = true;
            }
            TagState::Default => {
                self.package_manager = false;
                self.shell = false;
            }
            TagState::Pinned => {}
        }
        self.tag = tag;
    }

    /// Sets an include flag. Returns false when the options are disabled and
    /// the change was ignored.
    pub fn set_include(&mut self, option: IncludeOption, checked: bool) -> bool {
        if !self.options_enabled() {
            return false;
        }

        match option {
            IncludeOption::PackageManager => self.package_manager = checked,
            IncludeOption::Shell => self.shell = checked,
            IncludeOption::Toolchain => {
                self.toolchain = checked;
                return true;
            }
        }

        match (self.tag.state(), checked) {
            (TagState::Default, true) => self.tag = ImageTag::LatestBuilder,
            (TagState::Builder, false) if !self.package_manager && !self.shell => {
                self.tag = ImageTag::Latest
            }
            _ => {}
        }
        true
    }

    /// Sets the compliance variant. Returns false when the options are
    /// disabled and the change was ignored.
    pub fn set_compliance(&mut self, compliance: ComplianceLevel) -> bool {
        if !self.options_enabled() {
            return false;
        }
        self.compliance = compliance;
        true
    }

    /// Image name for `base_name`, suffixed for the compliance variant
    pub fn image_name(&self, base_name: &str) -> String {
        format!("{}{}", base_name, self.compliance.image_suffix())
    }

    /// Tag to pull, prefixed for the toolchain variant
    pub fn composed_tag(&self) -> String {
        if self.toolchain {
            format!("{}{}", TOOLCHAIN_TAG_PREFIX, self.tag.value())
        } else {
            self.tag.value().to_string()
        }
    }
}
