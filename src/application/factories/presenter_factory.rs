use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered view goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// A file when an output path was given, stdout otherwise
    pub fn for_output(path: Option<PathBuf>) -> Self {
        path.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

/// Picks the output adapter for a rendered view
pub struct PresenterFactory;

impl PresenterFactory {
    /// # Examples
    /// ```
    /// use hummingbird_catalog::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::for_output(None));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_output() {
        assert_eq!(PresenterType::for_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::for_output(Some(PathBuf::from("list.md"))),
            PresenterType::File(PathBuf::from("list.md"))
        );
    }

    #[test]
    fn test_stdout_presenter_accepts_output() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("").is_ok());
    }

    #[test]
    fn test_file_presenter_writes_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.md");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("# Catalog").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Catalog");
    }

    #[test]
    fn test_file_presenter_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.md");
        let presenter = PresenterFactory::create(PresenterType::File(path));
        let error = presenter.present("# Catalog").unwrap_err();
        assert!(error.to_string().contains("Failed to write to file"));
    }
}
