//! Core module: domain model, registries and grading

pub mod error;
pub mod grading;
pub mod models;
pub mod registrar;
pub mod registry;

pub use error::{RegistrarError, Result};
pub use registrar::{GradeReport, Registrar};

/// Returns the current version of the `StudentGen` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
