//! Interactive student form.
//!
//! Each field is either taken from a pre-filled value (command-line flag) or
//! prompted for with dialoguer. Prompts validate input with the same rules as
//! [`Student::validate`], so a record built purely from prompts is always
//! valid. Pre-filled values are not checked here; callers validate the
//! finished record before it reaches the repository.

use crate::libs::messages::Message;
use crate::libs::student::{self, Student, ValidationError};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Values supplied up front. `None` fields are prompted for.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub score: Option<f64>,
}

impl FormValues {
    /// True when every field was supplied and no prompt is needed.
    pub fn is_complete(&self) -> bool {
        self.id.is_some()
            && self.name.is_some()
            && self.email.is_some()
            && self.phone.is_some()
            && self.course.is_some()
            && self.score.is_some()
    }
}

type Rule = fn(&str) -> Result<(), ValidationError>;

fn non_blank(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        Err(ValidationError::MissingField("field"))
    } else {
        Ok(())
    }
}

fn email_rule(input: &str) -> Result<(), ValidationError> {
    non_blank(input)?;
    if student::is_valid_email(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn phone_rule(input: &str) -> Result<(), ValidationError> {
    non_blank(input)?;
    if student::is_valid_phone(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

fn score_rule(input: &str) -> Result<(), ValidationError> {
    non_blank(input)?;
    if student::is_valid_score(student::parse_score(input)?) {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange)
    }
}

fn prompt(message: Message, default: Option<String>, rule: Rule) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(message.to_string())
        .validate_with(move |value: &String| -> Result<(), String> { rule(value).map_err(|e| e.to_string()) });
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?.trim().to_string())
}

fn field(value: Option<String>, message: Message, default: Option<String>, rule: Rule) -> Result<String> {
    match value {
        Some(value) => Ok(value.trim().to_string()),
        None => prompt(message, default, rule),
    }
}

/// Prompt default for the score. Full precision, so accepting it stores the same value.
fn score_default(score: f64) -> String {
    score.to_string()
}

fn score_field(value: Option<f64>, default: Option<f64>) -> Result<f64> {
    match value {
        Some(value) => Ok(value),
        None => {
            let text = prompt(Message::PromptStudentScore, default.map(score_default), score_rule)?;
            Ok(student::parse_score(&text)?)
        }
    }
}

/// Collects a new record.
pub fn fill_new(values: FormValues) -> Result<Student> {
    let id = field(values.id, Message::PromptStudentId, None, non_blank)?;
    let name = field(values.name, Message::PromptStudentName, None, non_blank)?;
    let email = field(values.email, Message::PromptStudentEmail, None, email_rule)?;
    let phone = field(values.phone, Message::PromptStudentPhone, None, phone_rule)?;
    let course = field(values.course, Message::PromptStudentCourse, None, non_blank)?;
    let score = score_field(values.score, None)?;

    Ok(Student::new(&id, &name, &email, &phone, &course, score))
}

/// Collects replacement values for `existing`, offering its current values
/// as defaults. The id is carried over unchanged.
pub fn fill_edit(existing: &Student, values: FormValues) -> Result<Student> {
    let name = field(values.name, Message::PromptStudentName, Some(existing.name.clone()), non_blank)?;
    let email = field(values.email, Message::PromptStudentEmail, Some(existing.email.clone()), email_rule)?;
    let phone = field(values.phone, Message::PromptStudentPhone, Some(existing.phone.clone()), phone_rule)?;
    let course = field(values.course, Message::PromptStudentCourse, Some(existing.course.clone()), non_blank)?;
    let score = score_field(values.score, Some(existing.score))?;

    Ok(Student {
        name,
        email,
        phone,
        course,
        score,
        ..existing.clone()
    })
}
