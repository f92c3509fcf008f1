//! Allow-list of export file types

use std::path::Path;

use crate::utils::format_utils;

/// File-type suffixes the region can be exported as
const DEFAULT_EXTENSIONS: [&str; 5] = ["tif", "png", "bmp", "gif", "jpg"];

/// Ordered set of lowercase suffixes, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions {
    extensions: Vec<String>,
}

impl AllowedExtensions {
    /// Build a set from suffixes given with or without a leading dot
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for extension in extensions {
            let extension = Self::normalize(extension.as_ref());
            if !extension.is_empty() && !normalized.contains(&extension) {
                normalized.push(extension);
            }
        }

        AllowedExtensions { extensions: normalized }
    }

    /// Lowercase a suffix and strip its leading separator
    pub fn normalize(suffix: &str) -> String {
        suffix.trim().trim_start_matches('.').to_lowercase()
    }

    /// Suffix of a destination path, normalized
    pub fn suffix_of(path: &str) -> String {
        Path::new(path)
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(Self::normalize)
            .unwrap_or_default()
    }

    /// Check whether a suffix is allowed
    ///
    /// `"png"`, `".PNG"` and `"Png"` are the same suffix; an empty suffix
    /// is never allowed.
    pub fn contains(&self, suffix: &str) -> bool {
        let suffix = Self::normalize(suffix);
        !suffix.is_empty() && self.extensions.iter().any(|allowed| *allowed == suffix)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.extensions
    }

    /// Human-readable list, e.g. "tif, png, bmp, gif, or jpg"
    pub fn describe(&self) -> String {
        format_utils::join_with_or(&self.extensions)
    }
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        AllowedExtensions::new(DEFAULT_EXTENSIONS)
    }
}
