//! Host filesystem roots.
//!
//! The resolver never guesses where documents live; the host supplies a
//! root. These helpers provide that root on desktop hosts:
//! - macOS: ~/Documents and ~/Library/Caches/org.health-study-kit.*
//! - Windows: the user's Documents folder and %LOCALAPPDATA% cache
//! - Linux: XDG documents and cache directories

use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "health-study-kit";
const APP_NAME: &str = "Health Study Kit";

/// The host's documents directory.
///
/// Returns `None` when the platform does not expose one (for example a
/// Linux host without configured XDG user directories).
pub fn documents_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.document_dir().map(PathBuf::from))
}

/// The application cache directory for transient downloads.
pub fn caches_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_dir_resolves() {
        // Should return Some on any host with a home directory.
        let dir = caches_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn documents_dir_is_absolute_when_present() {
        if let Some(dir) = documents_dir() {
            assert!(dir.is_absolute());
        }
    }
}
