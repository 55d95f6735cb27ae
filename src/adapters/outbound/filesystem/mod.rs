/// Filesystem adapters for catalog input and quote output
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemCatalogReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
