//! Form Input Validation
//!
//! Provides per-field and whole-form validation for the seven housing
//! features. Validation failures are structured data for the rendering
//! collaborator, never errors: the pipeline stays usable after any of them.

mod validator;
mod violation;

pub use validator::{FieldOutcome, FormReport, RangeRule, ValidationConfig, Validator};
pub use violation::Violation;
