//! Metadata for a file chosen in a native file picker.
//!
//! Only the name and size are ever looked at; file contents are never read.

/// A file selected by the user, reduced to the metadata validation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    size_bytes: u64,
    extension: String,
}

impl SelectedFile {
    /// Create a selection from the picker's name and size.
    ///
    /// The extension is derived from the name and always lowercase.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            size_bytes,
            extension,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Lowercase suffix after the last `.`, empty if the name has none.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Derive the lowercase extension (no leading dot) from a file name.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}
