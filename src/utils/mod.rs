pub mod version_file;

pub use version_file::{FileStore, MemoryStore, VersionStore, DEFAULT_VERSION_FILE};
