use crate::api::Endpoint;
use crate::model::{display, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A registered member. The only record the front-end writes back.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Free text, matched against [`Team::name`](crate::model::Team::name).
    pub team: Option<String>,
    pub total_points: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn team_label(&self) -> &str {
        display::team_label(self.team.as_deref())
    }

    pub fn has_team(&self) -> bool {
        self.team.as_deref().is_some_and(|team| !team.is_empty())
    }
}

impl Record for User {
    const ENDPOINT: Endpoint = Endpoint::Users;
    const NOUN: &'static str = "users";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_badge_label() {
        let mut user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Peter Parker",
            "email": "peter@dailybugle.com",
            "total_points": 120
        }))
        .unwrap();
        assert!(!user.has_team());
        assert_eq!(user.team_label(), "No Team");

        user.team = Some("Team Marvel".to_string());
        assert!(user.has_team());
        assert_eq!(user.team_label(), "Team Marvel");
    }
}
