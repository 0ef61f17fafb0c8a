use crate::catalog::domain::ImageConfiguration;
use serde::Serialize;
use std::fmt;

/// Registry namespace every image is published under
pub const IMAGE_NAMESPACE: &str = "quay.io/hummingbird";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerRuntime {
    Podman,
    Docker,
}

impl ContainerRuntime {
    pub const ALL: [ContainerRuntime; 2] = [ContainerRuntime::Podman, ContainerRuntime::Docker];

    pub fn command(&self) -> &'static str {
        match self {
            ContainerRuntime::Podman => "podman",
            ContainerRuntime::Docker => "docker",
        }
    }
}

/// A ready-to-copy pull command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullCommand {
    pub runtime: ContainerRuntime,
    pub reference: String,
}

impl PullCommand {
    pub fn new(runtime: ContainerRuntime, reference: impl Into<String>) -> Self {
        Self {
            runtime,
            reference: reference.into(),
        }
    }
}

impl fmt::Display for PullCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pull {}", self.runtime.command(), self.reference)
    }
}

/// `<namespace>/<name>[-fips]:[go-]<tag>` for the given configuration
pub fn image_reference(base_name: &str, config: &ImageConfiguration) -> String {
    format!(
        "{}/{}:{}",
        IMAGE_NAMESPACE,
        config.image_name(base_name),
        config.composed_tag()
    )
}

/// Pull commands for every supported runtime, podman first
pub fn pull_commands(base_name: &str, config: &ImageConfiguration) -> Vec<PullCommand> {
    let reference = image_reference(base_name, config);
    ContainerRuntime::ALL
        .into_iter()
        .map(|runtime| PullCommand::new(runtime, reference.clone()))
        .collect()
}
