pub mod facet;
pub mod filter_criteria;
pub mod image_configuration;
pub mod image_profile;
pub mod item_collection;
pub mod recency;
pub mod software_item;
pub mod toggles;
pub mod view_state;

pub use facet::{Facet, FacetOptions, FacetValues};
pub use filter_criteria::{FilterChip, FilterCriteria};
pub use image_configuration::{ComplianceLevel, ImageConfiguration, ImageTag, IncludeOption, TagState};
pub use image_profile::{CveCounts, ImageProfile, TagOption};
pub use item_collection::ItemCollection;
pub use recency::Recency;
pub use software_item::{ItemId, SoftwareItem};
pub use toggles::{MetadataToggles, ToggleKey};
pub use view_state::{PageSize, SortKey, ViewMode, ViewState};
