use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts driving the prototype can tell a missing item apart from
/// argument mistakes and other failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The requested catalog item does not exist
    ItemNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an application error onto the exit code reported to the shell
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<CatalogError>() {
            Some(CatalogError::ItemNotFound { .. }) => ExitCode::ItemNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ItemNotFound => write!(f, "Item Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the catalog prototype.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint text next to each variant.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog item not found: {query}\n\n💡 Hint: {suggestion}")]
    ItemNotFound { query: String, suggestion: String },

    #[error("Duplicate catalog item id: {id}\n\n💡 Hint: Every item in a collection needs a unique id")]
    DuplicateItemId { id: String },

    #[error("'{value}' is not an option of the {facet} filter\n\n💡 Hint: Available options: {available}")]
    UnknownFacetOption {
        facet: String,
        value: String,
        available: String,
    },

    #[error("Tag '{tag}' is not published for {image}\n\n💡 Hint: Available tags: {available}")]
    UnknownTag {
        tag: String,
        image: String,
        available: String,
    },

    #[error("Metadata toggles were accessed outside of a mounted provider\n\n💡 Hint: Mount a MetadataProvider before rendering views that read toggles")]
    ProviderNotMounted,

    #[error("Invalid config file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ItemNotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::ItemNotFound), "Item Not Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_item_not_found() {
        let error: anyhow::Error = CatalogError::ItemNotFound {
            query: "nginx".to_string(),
            suggestion: "Try `hummingbird list`".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ItemNotFound);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = CatalogError::Validation {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("plain failure");
        assert_eq!(ExitCode::for_error(&plain), ExitCode::ApplicationError);
    }

    #[test]
    fn test_item_not_found_display() {
        let error = CatalogError::ItemNotFound {
            query: "nginx".to_string(),
            suggestion: "Run the list command".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Catalog item not found: nginx"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run the list command"));
    }

    #[test]
    fn test_unknown_facet_option_display() {
        let error = CatalogError::UnknownFacetOption {
            facet: "Platform".to_string(),
            value: "riscv64".to_string(),
            available: "x86_64, aarch64".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'riscv64' is not an option of the Platform filter"));
        assert!(display.contains("x86_64, aarch64"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = CatalogError::InvalidConfig {
            path: PathBuf::from("/test/hummingbird.config.yml"),
            reason: "page_size must be one of 20, 50, 100".to_string(),
            hint: "Fix the page_size entry".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config file"));
        assert!(display.contains("/test/hummingbird.config.yml"));
        assert!(display.contains("Fix the page_size entry"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = CatalogError::FileWriteError {
            path: PathBuf::from("/test/output.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_provider_not_mounted_display() {
        let display = format!("{}", CatalogError::ProviderNotMounted);
        assert!(display.contains("outside of a mounted provider"));
    }
}
