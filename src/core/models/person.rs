//! Person model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity record shared by everyone known to the system.
///
/// Immutable once created; a `Student` embeds one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: String,
    name: String,
    email: String,
    birth_date: NaiveDate,
}

impl Person {
    /// Create a new identity record
    ///
    /// # Arguments
    /// * `id` - Unique identifier (e.g., "001")
    /// * `name` - Display name
    /// * `email` - Contact email
    /// * `birth_date` - Date of birth
    #[must_use]
    pub const fn new(id: String, name: String, email: String, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            birth_date,
        }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date of birth
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id='{}', name='{}', email='{}', birthDate={}",
            self.id,
            self.name,
            self.email,
            self.birth_date.format("%d/%m/%Y")
        )
    }
}
