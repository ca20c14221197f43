//! Profile picture resolution
//!
//! A picture that cannot be read falls back to a neutral placeholder rather
//! than surfacing an error.

use std::fs::File;
use std::path::{Path, PathBuf};

/// What the display should show in the profile slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePicture {
    /// A readable image file
    Image(PathBuf),
    /// Image hidden, neutral background shown instead
    Fallback,
}

impl ProfilePicture {
    /// Resolve a configured picture path
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Fallback;
        };

        match File::open(path) {
            Ok(_) if path.is_file() => Self::Image(path.to_path_buf()),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "profile picture is not a file");
                Self::Fallback
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "profile picture unavailable");
                Self::Fallback
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// Short label for text-only surfaces
    pub fn label(&self) -> String {
        match self {
            Self::Image(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Fallback => "no picture".to_string(),
        }
    }
}
