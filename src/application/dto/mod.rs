/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases, keeping the
/// catalog layer free of argument parsing concerns.
mod detail_request;
mod list_request;
mod output_format;

pub use detail_request::DetailRequest;
pub use list_request::ListRequest;
pub use output_format::OutputFormat;
