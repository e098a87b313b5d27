//! Form submission argument types

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::client::models::{
    ContactForm, InternshipApplication, ManuscriptSubmission, NewsletterSignup, SubmissionType,
};

/// Arguments for `contact send`.
#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Reply-to email address
    #[arg(long)]
    pub email: String,

    /// Message subject
    #[arg(long, short = 's')]
    pub subject: Option<String>,

    /// Message text
    #[arg(long, short = 'm')]
    pub message: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl ContactArgs {
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.as_deref().unwrap_or_default().trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Arguments for `newsletter subscribe`.
#[derive(Args, Debug, Clone)]
pub struct SubscribeArgs {
    /// Email address to subscribe
    pub email: String,

    /// Subscriber name
    #[arg(long)]
    pub name: Option<String>,
}

impl SubscribeArgs {
    pub fn to_signup(&self) -> NewsletterSignup {
        NewsletterSignup {
            email: self.email.trim().to_string(),
            name: self.name.as_deref().unwrap_or_default().trim().to_string(),
        }
    }
}

/// Arguments for `internship apply`.
#[derive(Args, Debug, Clone)]
pub struct InternshipArgs {
    /// Applicant full name
    #[arg(long)]
    pub name: String,

    /// Applicant email
    #[arg(long)]
    pub email: String,

    /// Contact phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// University or institution
    #[arg(long)]
    pub university: String,

    /// Course of study (e.g. B.A. LL.B.)
    #[arg(long)]
    pub course: String,

    /// Year of study
    #[arg(long)]
    pub year: String,

    /// Proposed start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Proposed end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// Statement of interest
    #[arg(long)]
    pub letter: String,

    /// CV file (PDF or Word)
    #[arg(long)]
    pub cv: PathBuf,

    /// Writing sample file (PDF or Word)
    #[arg(long = "writing-sample")]
    pub writing_sample: PathBuf,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl InternshipArgs {
    pub fn to_application(&self) -> InternshipApplication {
        InternshipApplication {
            applicant_name: self.name.trim().to_string(),
            applicant_email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            university: self.university.trim().to_string(),
            course: self.course.trim().to_string(),
            year: self.year.trim().to_string(),
            proposed_start_date: self.start,
            proposed_end_date: self.end,
            interest_letter: self.letter.trim().to_string(),
            cv: self.cv.clone(),
            writing_sample: self.writing_sample.clone(),
        }
    }
}

/// Manuscript kind accepted by `submission send`.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SubmissionKind {
    /// Blog article
    #[default]
    Blog,
    /// Journal article
    Journal,
}

impl From<SubmissionKind> for SubmissionType {
    fn from(kind: SubmissionKind) -> Self {
        match kind {
            SubmissionKind::Blog => SubmissionType::BlogArticle,
            SubmissionKind::Journal => SubmissionType::JournalArticle,
        }
    }
}

/// Arguments for `submission send`.
#[derive(Args, Debug, Clone)]
pub struct SubmissionArgs {
    /// Manuscript kind
    #[arg(long = "type", short = 't', value_enum, default_value = "blog")]
    pub kind: SubmissionKind,

    /// Manuscript title
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Author email
    #[arg(long)]
    pub email: String,

    /// Short author bio
    #[arg(long)]
    pub bio: Option<String>,

    /// Manuscript text
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read manuscript text from a file
    #[arg(long = "content-file")]
    pub content_file: Option<PathBuf>,

    /// Keywords, comma-separated
    #[arg(long, short = 'k', value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl SubmissionArgs {
    /// Build the submission; `--content-file` is read from disk.
    pub async fn to_submission(&self) -> std::io::Result<ManuscriptSubmission> {
        let content = match (&self.content, &self.content_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => tokio::fs::read_to_string(path).await?,
            (None, None) => String::new(),
        };

        let keywords: Vec<&str> = self
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect();

        Ok(ManuscriptSubmission {
            submission_type: self.kind.into(),
            title: self.title.trim().to_string(),
            author_name: self.author.trim().to_string(),
            author_email: self.email.trim().to_string(),
            author_bio: self.bio.as_deref().unwrap_or_default().trim().to_string(),
            content: content.trim().to_string(),
            keywords: keywords.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn submission_args() -> SubmissionArgs {
        SubmissionArgs {
            kind: SubmissionKind::Journal,
            title: " Consent in Mediation ".to_string(),
            author: "R. Iyer".to_string(),
            email: "r@example.com".to_string(),
            bio: None,
            content: None,
            content_file: None,
            keywords: vec!["mediation".to_string(), " ".to_string(), "consent".to_string()],
            yes: true,
        }
    }

    #[test]
    fn test_contact_args_trim_and_blank_subject() {
        let args = ContactArgs {
            name: " Asha ".to_string(),
            email: "asha@example.com".to_string(),
            subject: None,
            message: "Hello".to_string(),
            yes: false,
        };

        let form = args.to_form();

        assert_eq!(form.name, "Asha");
        assert!(form.subject.is_empty());
        assert!(form.validate().is_ok());
    }

    #[tokio::test]
    async fn test_submission_reads_content_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Full manuscript text").unwrap();

        let args = SubmissionArgs {
            content_file: Some(file.path().to_path_buf()),
            ..submission_args()
        };

        let submission = args.to_submission().await.unwrap();

        assert_eq!(submission.submission_type, SubmissionType::JournalArticle);
        assert_eq!(submission.title, "Consent in Mediation");
        assert_eq!(submission.content, "Full manuscript text");
        assert_eq!(submission.keywords, "mediation, consent");
    }

    #[tokio::test]
    async fn test_submission_missing_content_file_errors() {
        let args = SubmissionArgs {
            content_file: Some(PathBuf::from("/nonexistent/manuscript.txt")),
            ..submission_args()
        };

        assert!(args.to_submission().await.is_err());
    }
}
