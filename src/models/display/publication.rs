//! Journal and newsletter archive display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{JournalIssue, NewsletterIssue};
use crate::output::formatters::{format_opt_date, or_dash, truncate_text};

/// Journal issue display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JournalDisplay {
    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "AUTHORS")]
    pub authors: String,

    #[tabled(rename = "VOL/ISSUE")]
    pub volume: String,

    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    #[tabled(rename = "PDF")]
    pub pdf: String,
}

impl From<JournalIssue> for JournalDisplay {
    fn from(issue: JournalIssue) -> Self {
        let volume = match (issue.volume.as_deref(), issue.issue.as_deref()) {
            (Some(v), Some(i)) => format!("{}/{}", v, i),
            (Some(v), None) => v.to_string(),
            (None, Some(i)) => i.to_string(),
            (None, None) => "-".to_string(),
        };
        Self {
            title: truncate_text(&issue.title, 60),
            authors: or_dash(&issue.authors.join(", ")),
            volume,
            published: format_opt_date(issue.published_date.as_deref()),
            pdf: or_dash(issue.pdf_file.as_deref().unwrap_or_default()),
        }
    }
}

/// Newsletter archive display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NewsletterDisplay {
    #[tabled(rename = "ISSUE")]
    pub issue_number: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    #[tabled(rename = "PDF")]
    pub pdf: String,
}

impl From<NewsletterIssue> for NewsletterDisplay {
    fn from(issue: NewsletterIssue) -> Self {
        Self {
            issue_number: or_dash(&issue.issue_number),
            title: issue.title,
            published: format_opt_date(issue.published_date.as_deref()),
            pdf: or_dash(issue.pdf_file.as_deref().unwrap_or_default()),
        }
    }
}
