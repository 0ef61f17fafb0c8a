/// Filesystem adapters for output presentation
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
