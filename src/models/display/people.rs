//! Team and leadership display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Leader, TeamMember};
use crate::output::formatters::or_dash;

/// Team member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamMemberDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "BATCH")]
    pub batch: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,
}

impl From<TeamMember> for TeamMemberDisplay {
    fn from(member: TeamMember) -> Self {
        Self {
            role: member.role_label().to_string(),
            name: member.name,
            batch: or_dash(&member.batch),
            email: or_dash(&member.email),
        }
    }
}

/// Leadership display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LeaderDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "POSITION")]
    pub position: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,
}

impl From<Leader> for LeaderDisplay {
    fn from(leader: Leader) -> Self {
        Self {
            name: leader.name,
            position: or_dash(&leader.position),
            email: or_dash(&leader.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::TeamMemberBuilder;

    #[test]
    fn test_team_member_display_uses_role_label() {
        let member = TeamMemberBuilder::new("Asha Rao")
            .role("convenor", "Convenor")
            .build();

        let display = TeamMemberDisplay::from(member);

        assert_eq!(display.name, "Asha Rao");
        assert_eq!(display.role, "Convenor");
        assert_eq!(display.email, "-");
    }

    #[test]
    fn test_leader_display() {
        let display = LeaderDisplay::from(Leader {
            name: "Prof. Rao".to_string(),
            position: "Faculty Convenor".to_string(),
            ..Default::default()
        });

        assert_eq!(display.position, "Faculty Convenor");
    }
}
