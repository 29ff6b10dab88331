//! Student record entity and its validation rules.
//!
//! A [`Student`] is a plain data holder for one row of the `students` table.
//! Validation lives next to the data so that both the interactive form and
//! the repository apply exactly the same rules before anything reaches
//! storage.
//!
//! ## Rules
//!
//! - `id`, `name` and `course` must be non-blank
//! - `email` must match `^[A-Za-z0-9+_.-]+@(.+)$`
//! - `phone` must be exactly ten ASCII digits
//! - `score` must lie in `[0, 100]`
//!
//! ```rust
//! use roster::libs::student::Student;
//!
//! let student = Student::builder()
//!     .id("S1")
//!     .name("Ann")
//!     .email("ann@x.com")
//!     .phone("1234567890")
//!     .course("CS")
//!     .score(88.5)
//!     .build();
//! assert!(student.is_valid());
//! ```

use crate::libs::messages::Message;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(.+)$";
pub const PHONE_PATTERN: &str = r"^[0-9]{10}$";
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// The first rule a record breaks.
///
/// Display text is the message shown to the user by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", Message::AllFieldsRequired)]
    MissingField(&'static str),
    #[error("{}", Message::InvalidEmail)]
    InvalidEmail,
    #[error("{}", Message::InvalidPhone)]
    InvalidPhone,
    #[error("{}", Message::InvalidScore)]
    ScoreOutOfRange,
    #[error("{}", Message::InvalidScoreFormat)]
    ScoreNotANumber,
}

/// One student's stored attributes.
///
/// `created_at` and `updated_at` are assigned by the database and are `None`
/// on records that have not been read back from storage yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Roll number. Primary key, never changes after creation.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    /// Marks in the range `[0, 100]`.
    pub score: f64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Student {
    pub fn new(id: &str, name: &str, email: &str, phone: &str, course: &str, score: f64) -> Self {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            course: course.to_string(),
            score,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn builder() -> StudentBuilder {
        StudentBuilder::default()
    }

    pub fn is_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    pub fn is_valid_phone(&self) -> bool {
        is_valid_phone(&self.phone)
    }

    pub fn is_valid_score(&self) -> bool {
        is_valid_score(self.score)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks every rule in form order and returns the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("course", &self.course),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !self.is_valid_email() {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.is_valid_phone() {
            return Err(ValidationError::InvalidPhone);
        }
        if !self.is_valid_score() {
            return Err(ValidationError::ScoreOutOfRange);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_re().is_match(phone)
}

pub fn is_valid_score(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Parses score text from a form field. Range is checked separately.
pub fn parse_score(input: &str) -> Result<f64, ValidationError> {
    input.trim().parse::<f64>().map_err(|_| ValidationError::ScoreNotANumber)
}

#[derive(Debug, Default)]
pub struct StudentBuilder {
    id: String,
    name: String,
    email: String,
    phone: String,
    course: String,
    score: f64,
}

impl StudentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn build(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            course: self.course,
            score: self.score,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5)
    }

    #[test]
    fn test_valid_record() {
        assert!(ann().is_valid());
        assert_eq!(ann().validate(), Ok(()));
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = Student::builder()
            .id("S1")
            .name("Ann")
            .email("ann@x.com")
            .phone("1234567890")
            .course("CS")
            .score(88.5)
            .build();
        assert_eq!(built, ann());
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("first.last+tag@school.edu"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("a n@x.com"));
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(is_valid_score(0.0));
        assert!(is_valid_score(100.0));
        assert!(!is_valid_score(-0.1));
        assert!(!is_valid_score(100.01));
        assert!(!is_valid_score(f64::NAN));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let mut student = ann();
        student.name = "   ".to_string();
        student.email = "bad".to_string();
        assert_eq!(student.validate(), Err(ValidationError::MissingField("name")));

        let mut student = ann();
        student.email = "bad".to_string();
        assert_eq!(student.validate(), Err(ValidationError::InvalidEmail));

        let mut student = ann();
        student.phone = "12345".to_string();
        assert_eq!(student.validate(), Err(ValidationError::InvalidPhone));

        let mut student = ann();
        student.score = 101.0;
        assert_eq!(student.validate(), Err(ValidationError::ScoreOutOfRange));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(" 91.5 "), Ok(91.5));
        assert_eq!(parse_score("ninety"), Err(ValidationError::ScoreNotANumber));
        assert_eq!(ValidationError::ScoreNotANumber.to_string(), "Marks must be a valid number!");
    }
}
