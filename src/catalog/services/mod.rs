mod catalog_engine;
mod item_filter;
mod item_sorter;
mod paginator;
mod pull_command;
mod section_layout;

pub use catalog_engine::{CatalogEngine, CatalogPage};
pub use item_filter::ItemFilter;
pub use item_sorter::ItemSorter;
pub use paginator::{PageWindow, Paginator};
pub use pull_command::{
    image_reference, pull_commands, ContainerRuntime, PullCommand, IMAGE_NAMESPACE,
};
pub use section_layout::{DetailSection, SectionLayout, SectionTracker};
