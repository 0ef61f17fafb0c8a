use crate::application::dto::DetailRequest;
use crate::application::read_models::{DetailContext, ItemDetailBuilder, ItemDetailView};
use crate::application::state::ToggleStore;
use crate::catalog::domain::{ImageConfiguration, ImageProfile};
use crate::catalog::services::{SectionLayout, SectionTracker};
use crate::ports::outbound::{CatalogRepository, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// ShowItemDetailUseCase - Derives the detail page of one catalog item
///
/// Replays the request against a fresh image configuration: tag first, then
/// includes, omits and compliance. Changes the configuration refuses (on a
/// pinned version tag) are reported as warnings, not errors.
///
/// # Type Parameters
/// * `R` - CatalogRepository implementation
/// * `P` - ProgressReporter implementation
pub struct ShowItemDetailUseCase<R, P> {
    repository: R,
    progress_reporter: P,
    store: ToggleStore,
}

impl<R, P> ShowItemDetailUseCase<R, P>
where
    R: CatalogRepository,
    P: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: P, store: ToggleStore) -> Self {
        Self {
            repository,
            progress_reporter,
            store,
        }
    }

    /// # Errors
    /// Returns an error if:
    /// - The item does not exist (`ItemNotFound`)
    /// - The requested tag is not published for the image (`UnknownTag`)
    pub fn execute(&self, request: &DetailRequest) -> Result<ItemDetailView> {
        let items = self.repository.list_items()?;
        let item = items.get(&request.item)?;
        let profile = self.repository.image_profile(item)?;

        let configuration = self.configure(request, &profile)?;

        let toggles = self.store.read();
        let layout = SectionLayout::for_toggles(&toggles);
        let mut tracker = SectionTracker::new();
        if let Some(section) = request.section {
            if !tracker.observe(&layout, section) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Section '{}' is hidden by the current toggles",
                    section
                ));
            }
        }

        Ok(ItemDetailBuilder::build(&DetailContext {
            item,
            profile: &profile,
            configuration: &configuration,
            toggles: &toggles,
            tracker: &tracker,
            tag_search: &request.tag_search,
            scanned_minutes: request.scanned_minutes,
        }))
    }

    fn configure(
        &self,
        request: &DetailRequest,
        profile: &ImageProfile,
    ) -> Result<ImageConfiguration> {
        let mut configuration = ImageConfiguration::new();

        if let Some(tag) = &request.tag {
            if profile.tag(tag).is_none() {
                let available: Vec<&str> =
                    profile.tags().iter().map(|option| option.value.value()).collect();
                return Err(CatalogError::UnknownTag {
                    tag: tag.to_string(),
                    image: profile.base_name().to_string(),
                    available: available.join(", "),
                }
                .into());
            }
            configuration.select_tag(tag.clone());
        }

        let changes = request
            .includes
            .iter()
            .map(|option| (*option, true))
            .chain(request.omits.iter().map(|option| (*option, false)));
        for (option, checked) in changes {
            if !configuration.set_include(option, checked) {
                self.warn_pinned(&configuration);
            }
        }

        if let Some(compliance) = request.compliance {
            if !configuration.set_compliance(compliance) {
                self.warn_pinned(&configuration);
            }
        }

        Ok(configuration)
    }

    fn warn_pinned(&self, configuration: &ImageConfiguration) {
        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: Image options are disabled on version tag '{}'; switch to latest or latest-builder to change them",
            configuration.tag()
        ));
    }
}
