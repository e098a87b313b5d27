//! Team and leadership models

use serde::{Deserialize, Serialize};

use super::Id;
use crate::content::normalize::{MediaRefs, MediaResolver};

/// Student team member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Id,
    pub name: String,

    /// Role key (e.g. `co_convenor`)
    #[serde(default)]
    pub role: String,

    /// Human-readable role (e.g. `Co-convenor`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_display: Option<String>,

    #[serde(default)]
    pub batch: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub bio: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub order: u32,
}

impl TeamMember {
    /// Display role, falling back to the raw role key.
    pub fn role_label(&self) -> &str {
        self.role_display.as_deref().unwrap_or(&self.role)
    }
}

impl MediaRefs for TeamMember {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.image_url = resolver.resolve_first(&[self.image_url.as_deref(), self.image.as_deref()]);
    }
}

/// Faculty leadership entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leader {
    pub id: Id,
    pub name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub order: u32,
}

impl MediaRefs for Leader {
    fn resolve_media(&mut self, resolver: &MediaResolver) {
        self.image_url = resolver.resolve_first(&[self.image_url.as_deref(), self.image.as_deref()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_member_role_label() {
        let member: TeamMember = serde_json::from_value(json!({
            "id": "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed",
            "name": "Asha Rao",
            "role": "co_convenor",
            "role_display": "Co-convenor",
            "batch": "2021-26"
        }))
        .unwrap();

        assert_eq!(member.role_label(), "Co-convenor");
        assert!(matches!(member.id, Id::Text(_)));
    }

    #[test]
    fn test_team_member_role_label_falls_back_to_key() {
        let member = TeamMember {
            role: "student_member".to_string(),
            ..Default::default()
        };
        assert_eq!(member.role_label(), "student_member");
    }

    #[test]
    fn test_leader_prefers_server_resolved_url() {
        let mut leader = Leader {
            image: Some("leadership_images/dean.jpg".to_string()),
            image_url: Some("https://cdn.example/dean.jpg".to_string()),
            ..Default::default()
        };
        leader.resolve_media(&MediaResolver::new("http://localhost:8000"));

        assert_eq!(
            leader.image_url.as_deref(),
            Some("https://cdn.example/dean.jpg")
        );
    }
}
