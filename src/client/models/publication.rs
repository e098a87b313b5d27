//! Journal and newsletter archive models

use serde::{Deserialize, Serialize};

use super::Id;
use crate::content::normalize::{MediaRefs, MediaResolver};

/// Journal article / issue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalIssue {
    pub id: Id,
    pub title: String,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, alias = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, alias = "pdfFile", skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<String>,
}

impl MediaRefs for JournalIssue {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.pdf_file = resolver.resolve_first(&[self.pdf_file.as_deref()]);
    }
}

/// Archived newsletter issue (PDF)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterIssue {
    pub id: Id,
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Issue label, e.g. "Issue 1, 2024"
    #[serde(default)]
    pub issue_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub order: u32,
}

impl MediaRefs for NewsletterIssue {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.pdf_file = resolver.resolve_first(&[self.pdf_file.as_deref()]);
    }
}
