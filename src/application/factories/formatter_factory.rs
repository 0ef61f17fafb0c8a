use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating view formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use hummingbird_catalog::application::dto::OutputFormat;
    /// use hummingbird_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use hummingbird_catalog::application::dto::OutputFormat;
    /// use hummingbird_catalog::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Rendering Markdown output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON output...",
            OutputFormat::Markdown => "📝 Rendering Markdown output...",
        }
    }
}
