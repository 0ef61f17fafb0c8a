/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with its data source, the console and the output target.
pub mod catalog_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_repository::CatalogRepository;
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
