//! File field controller.
//!
//! [`FileFieldController`] sits between a file input and the form that owns
//! the field's value. It is the only thing that writes the field: accepted
//! files are stored, rejected ones clear it. It never caches validity;
//! every read re-checks the stored file against the current constraints.

use super::error::FileRejection;
use super::file::SelectedFile;
use super::validation::{Constraints, ValidationResult};

/// Options passed along with a field write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetValueOptions {
    /// Re-run the host's own validation for the field after the write.
    pub validate: bool,
}

/// Capability pair a form must offer to host a file field.
pub trait FormHost {
    /// Current value of `field`, `None` when no file is stored.
    fn get_value(&self, field: &str) -> Option<SelectedFile>;

    /// Replace the value of `field`.
    fn set_value(&self, field: &str, value: Option<SelectedFile>, options: SetValueOptions);
}

impl<H: FormHost + ?Sized> FormHost for &H {
    fn get_value(&self, field: &str) -> Option<SelectedFile> {
        (**self).get_value(field)
    }

    fn set_value(&self, field: &str, value: Option<SelectedFile>, options: SetValueOptions) {
        (**self).set_value(field, value, options)
    }
}

/// Observable state of a file field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    NoFile,
    HasFile,
}

/// Validates candidates for one named field and writes the outcome to a host.
#[derive(Clone, Debug)]
pub struct FileFieldController<H> {
    host: H,
    field: String,
    constraints: Constraints,
}

impl<H: FormHost> FileFieldController<H> {
    pub fn new(host: H, field: impl Into<String>, constraints: Constraints) -> Self {
        Self {
            host,
            field: field.into(),
            constraints,
        }
    }

    /// Check a candidate against this field's constraints.
    pub fn evaluate(&self, candidate: &SelectedFile) -> ValidationResult {
        self.constraints.evaluate(candidate)
    }

    /// Store `candidate` as the field value and ask the host to re-validate.
    pub fn accept(&self, candidate: SelectedFile) {
        self.host.set_value(
            &self.field,
            Some(candidate),
            SetValueOptions { validate: true },
        );
    }

    /// Clear the field and return the message for `reason`.
    ///
    /// Returns `None` for [`ValidationResult::Valid`]; the field is cleared
    /// either way.
    pub fn reject(&self, reason: ValidationResult) -> Option<FileRejection> {
        self.host
            .set_value(&self.field, None, SetValueOptions { validate: true });
        reason.rejection(&self.constraints)
    }

    /// Remove the stored file. Safe to call when the field is already empty.
    pub fn clear(&self) {
        self.host
            .set_value(&self.field, None, SetValueOptions { validate: true });
    }

    /// Handle a picker selection: evaluate, then accept or reject.
    pub fn select(&self, candidate: SelectedFile) -> Result<(), FileRejection> {
        match self.evaluate(&candidate) {
            ValidationResult::Valid => {
                self.accept(candidate);
                Ok(())
            }
            reason => match self.reject(reason) {
                Some(rejection) => Err(rejection),
                None => Ok(()),
            },
        }
    }

    /// The stored file, only if it still passes the current constraints.
    pub fn current(&self) -> Option<SelectedFile> {
        self.host
            .get_value(&self.field)
            .filter(|file| self.evaluate(file).is_valid())
    }

    pub fn state(&self) -> FieldState {
        if self.current().is_some() {
            FieldState::HasFile
        } else {
            FieldState::NoFile
        }
    }

    /// Reject a stored file that no longer satisfies the constraints.
    ///
    /// Returns the rejection when the field was cleared, `None` when the
    /// field is empty or its file is still valid.
    pub fn revalidate(&self) -> Option<FileRejection> {
        let stored = self.host.get_value(&self.field)?;
        match self.evaluate(&stored) {
            ValidationResult::Valid => None,
            reason => self.reject(reason),
        }
    }
}
