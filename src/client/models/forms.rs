//! Form submission payloads and acknowledgements

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::request::{Attachment, MultipartForm};
use crate::error::ApiError;

/// Collect the names of blank required fields.
fn missing<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

fn require(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing = missing(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Contact form message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,

    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ])
    }
}

/// Newsletter subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl NewsletterSignup {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[("email", &self.email)])
    }
}

/// Internship application. CV and writing sample are uploaded as files.
#[derive(Debug, Clone)]
pub struct InternshipApplication {
    pub applicant_name: String,
    pub applicant_email: String,
    pub phone: String,
    pub university: String,
    pub course: String,
    pub year: String,
    pub proposed_start_date: NaiveDate,
    pub proposed_end_date: NaiveDate,
    pub interest_letter: String,
    pub cv: PathBuf,
    pub writing_sample: PathBuf,
}

impl InternshipApplication {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("applicant_name", &self.applicant_name),
            ("applicant_email", &self.applicant_email),
            ("university", &self.university),
            ("course", &self.course),
            ("year", &self.year),
            ("interest_letter", &self.interest_letter),
        ])?;

        if self.proposed_end_date < self.proposed_start_date {
            return Err(ApiError::InvalidRequest(
                "proposed_end_date must not be before proposed_start_date".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the multipart body, reading both attachments from disk.
    pub async fn to_multipart(&self) -> Result<MultipartForm, ApiError> {
        let cv = read_attachment("cv", &self.cv).await?;
        let writing_sample = read_attachment("writing_sample", &self.writing_sample).await?;

        Ok(MultipartForm::new()
            .text("applicant_name", &self.applicant_name)
            .text("applicant_email", &self.applicant_email)
            .text("phone", &self.phone)
            .text("university", &self.university)
            .text("course", &self.course)
            .text("year", &self.year)
            .text("proposed_start_date", self.proposed_start_date.to_string())
            .text("proposed_end_date", self.proposed_end_date.to_string())
            .text("interest_letter", &self.interest_letter)
            .file(cv)
            .file(writing_sample))
    }
}

async fn read_attachment(field: &str, path: &std::path::Path) -> Result<Attachment, ApiError> {
    Attachment::from_path(field, path).await.map_err(|e| {
        ApiError::InvalidRequest(format!("Cannot read {} ({}): {}", field, path.display(), e))
    })
}

/// Kind of manuscript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    #[default]
    BlogArticle,
    JournalArticle,
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionType::BlogArticle => write!(f, "blog_article"),
            SubmissionType::JournalArticle => write!(f, "journal_article"),
        }
    }
}

/// Blog or journal manuscript submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManuscriptSubmission {
    pub submission_type: SubmissionType,
    pub title: String,
    pub author_name: String,
    pub author_email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_bio: String,

    pub content: String,

    /// Comma-separated keywords
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keywords: String,
}

impl ManuscriptSubmission {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("title", &self.title),
            ("author_name", &self.author_name),
            ("author_email", &self.author_email),
            ("content", &self.content),
        ])
    }
}

/// Server acknowledgement of an accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,

    #[serde(
        default,
        alias = "referenceNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_number: Option<String>,
}

impl Acknowledgement {
    /// Decode a write response. Empty or unexpected bodies acknowledge with
    /// `fallback` as the message.
    pub fn from_payload(payload: Value, fallback: &str) -> Self {
        let mut ack = serde_json::from_value::<Acknowledgement>(payload).unwrap_or_default();
        if ack.message.is_empty() {
            ack.message = fallback.to_string();
        }
        ack
    }
}
