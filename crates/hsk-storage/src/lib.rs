pub mod host;
pub mod resolver;

pub use host::{caches_dir, documents_dir};
pub use resolver::{StorageError, ensure_storage_directory, resolve_storage_directory};
