//! Validation of raw text typed into the console

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static STUDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,10}$").expect("valid student id pattern"));

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-]{2,50}$").expect("valid name pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("valid email pattern")
});

/// Earliest accepted birth year
const MIN_BIRTH_YEAR: i32 = 1900;

/// Student ids are 3-10 alphanumeric characters
pub fn student_id(raw: &str) -> Result<&str, String> {
    let id = raw.trim();
    if STUDENT_ID.is_match(id) {
        Ok(id)
    } else {
        Err("Student ID must be 3-10 alphanumeric characters.".to_string())
    }
}

/// Names are 2-50 letters, spaces or hyphens
pub fn name(raw: &str) -> Result<&str, String> {
    let name = raw.trim();
    if NAME.is_match(name) {
        Ok(name)
    } else {
        Err("Name must contain only letters, spaces, or hyphens (2-50 characters).".to_string())
    }
}

/// Emails look like `example@domain.com`
pub fn email(raw: &str) -> Result<&str, String> {
    let email = raw.trim();
    if EMAIL.is_match(email) {
        Ok(email)
    } else {
        Err("Email must be in format: example@domain.com".to_string())
    }
}

/// Birth dates are `DD/MM/YYYY`, no earlier than 1900 and not after `today`
pub fn birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .map_err(|_| "Please use DD/MM/YYYY format (e.g., 16/01/2018)".to_string())?;
    if date.year() < MIN_BIRTH_YEAR {
        return Err(format!("Birth year must be {MIN_BIRTH_YEAR} or later."));
    }
    if date > today {
        return Err("Birth date cannot be in the future!".to_string());
    }
    Ok(date)
}

/// Course codes are compared upper-case
pub fn course_code(raw: &str) -> Result<String, String> {
    let code = raw.trim();
    if code.is_empty() {
        Err("Course code is required.".to_string())
    } else {
        Ok(code.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_student_id() {
        assert_eq!(student_id(" 001 "), Ok("001"));
        assert!(student_id("abc123XYZ0").is_ok());
        assert!(student_id("01").is_err());
        assert!(student_id("abc-123").is_err());
        assert!(student_id("12345678901").is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(name("John Doe"), Ok("John Doe"));
        assert!(name("Mary-Jane Watson").is_ok());
        assert!(name("J").is_err());
        assert!(name("R2D2").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("johndoe@gmail.com").is_ok());
        assert!(email("first.last+tag@uni.ac.uk").is_ok());
        assert!(email("no-at-sign.com").is_err());
        assert!(email("user@nodot").is_err());
    }

    #[test]
    fn test_birth_date() {
        assert_eq!(
            birth_date("16/01/2018", today()),
            Ok(NaiveDate::from_ymd_opt(2018, 1, 16).unwrap())
        );
        assert!(birth_date("29/02/2000", today()).is_ok());
        assert!(birth_date("29/02/2001", today()).is_err());
        assert!(birth_date("13/13/2000", today()).is_err());
        assert!(birth_date("2000-01-01", today()).is_err());
        assert!(birth_date("01/01/1899", today()).is_err());
        assert!(birth_date("19/10/2026", today()).is_err());
    }

    #[test]
    fn test_course_code() {
        assert_eq!(course_code(" intro-cs-1 "), Ok("INTRO-CS-1".to_string()));
        assert!(course_code("   ").is_err());
    }
}
