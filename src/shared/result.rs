/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation in the crate returns this, with `CatalogError`
/// values carried inside when the caller needs to tell failures apart.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
