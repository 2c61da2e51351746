//! Accept/reject rules for a single file field.
//!
//! A candidate is checked against an extension allowlist first and a byte
//! limit second. The order is fixed: a file with a disallowed extension is
//! reported as such even when it is also too large.

use std::collections::BTreeSet;

use super::error::{ConfigError, FileRejection};
use super::file::SelectedFile;
use crate::config::BYTES_PER_MB;
use crate::utils::format::format_megabytes;

/// Outcome of checking a candidate file against [`Constraints`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    InvalidExtension,
    TooLarge,
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// The user-facing rejection for this outcome, `None` when valid.
    pub fn rejection(self, constraints: &Constraints) -> Option<FileRejection> {
        match self {
            Self::Valid => None,
            Self::InvalidExtension => Some(FileRejection::InvalidExtension),
            Self::TooLarge => Some(FileRejection::TooLarge {
                limit_mb: constraints.max_size_display(),
            }),
        }
    }
}

/// Allowed extensions and maximum size for a file field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraints {
    allowed_extensions: BTreeSet<String>,
    max_size_bytes: u64,
}

impl Constraints {
    /// Build constraints from an extension list and a byte limit.
    ///
    /// Extensions are normalized: a leading `.` is dropped and the rest is
    /// lowercased, so `".PNG"` and `"png"` name the same entry. Fails with
    /// [`ConfigError::NoExtensions`] when nothing is left after that.
    pub fn new<I, S>(allowed_extensions: I, max_size_bytes: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if max_size_bytes == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        let allowed_extensions: BTreeSet<String> = allowed_extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        if allowed_extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        Ok(Self {
            allowed_extensions,
            max_size_bytes,
        })
    }

    /// Build constraints from a limit expressed in megabytes (× 1,048,576).
    pub fn from_megabytes<I, S>(allowed_extensions: I, max_size_mb: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(allowed_extensions, max_size_mb.saturating_mul(BYTES_PER_MB))
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }

    /// Value for the native `accept` attribute, e.g. `.jpg,.png`.
    pub fn accept_attr(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The size limit in megabytes, as shown in rejection messages.
    pub fn max_size_display(&self) -> String {
        format_megabytes(self.max_size_bytes)
    }

    /// Check a candidate: extension first, then size.
    pub fn evaluate(&self, candidate: &SelectedFile) -> ValidationResult {
        evaluate(candidate, self)
    }
}

/// Decide whether `candidate` satisfies `constraints`.
pub fn evaluate(candidate: &SelectedFile, constraints: &Constraints) -> ValidationResult {
    if !constraints.allows_extension(candidate.extension()) {
        ValidationResult::InvalidExtension
    } else if candidate.size_bytes() > constraints.max_size_bytes() {
        ValidationResult::TooLarge
    } else {
        ValidationResult::Valid
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Constraints {
        Constraints::new(["png", "jpg"], 5_242_880).unwrap()
    }

    #[test]
    fn test_disallowed_extension_wins_over_size() {
        let c = images();
        for size in [0, 1000, 5_242_880, 6_000_000, u64::MAX] {
            assert_eq!(
                evaluate(&SelectedFile::new("doc.pdf", size), &c),
                ValidationResult::InvalidExtension
            );
        }
        assert_eq!(
            evaluate(&SelectedFile::new("noextension", 10), &c),
            ValidationResult::InvalidExtension
        );
    }

    #[test]
    fn test_size_boundary() {
        let c = images();
        assert_eq!(
            c.evaluate(&SelectedFile::new("a.jpg", 5_242_880)),
            ValidationResult::Valid
        );
        assert_eq!(
            c.evaluate(&SelectedFile::new("a.jpg", 5_242_881)),
            ValidationResult::TooLarge
        );
        assert_eq!(
            c.evaluate(&SelectedFile::new("a.png", 0)),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let c = images();
        assert!(c.evaluate(&SelectedFile::new("photo.PNG", 1000)).is_valid());
        assert!(c.evaluate(&SelectedFile::new("photo.Jpg", 1000)).is_valid());
    }

    #[test]
    fn test_constraints_normalize_extensions() {
        let c = Constraints::new([".PNG", " jpg ", ""], 10).unwrap();
        assert!(c.allows_extension("png"));
        assert!(c.allows_extension("jpg"));
        assert!(!c.allows_extension(""));
        assert_eq!(c.accept_attr(), ".jpg,.png");
    }

    #[test]
    fn test_constraints_from_megabytes() {
        let c = Constraints::from_megabytes(["png"], 5).unwrap();
        assert_eq!(c.max_size_bytes(), 5_242_880);
        assert_eq!(c.max_size_display(), "5");
    }

    #[test]
    fn test_empty_allowlist_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(Constraints::new(none, 10), Err(ConfigError::NoExtensions));
        assert_eq!(
            Constraints::new([".", " . ", ""], 10),
            Err(ConfigError::NoExtensions)
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(Constraints::new(["png"], 0), Err(ConfigError::ZeroLimit));
        assert_eq!(
            Constraints::from_megabytes(["png"], 0),
            Err(ConfigError::ZeroLimit)
        );
    }

    #[test]
    fn test_rejection_for_result() {
        let c = images();
        assert_eq!(ValidationResult::Valid.rejection(&c), None);
        assert_eq!(
            ValidationResult::InvalidExtension.rejection(&c),
            Some(FileRejection::InvalidExtension)
        );
        assert_eq!(
            ValidationResult::TooLarge
                .rejection(&c)
                .map(|r| r.to_string()),
            Some("file exceeds size limit of 5MB".to_string())
        );
    }
}
