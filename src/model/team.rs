use crate::api::Endpoint;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub total_points: i64,
    pub member_count: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Team {
    pub fn member_count(&self) -> i64 {
        self.member_count.unwrap_or(0)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Record for Team {
    const ENDPOINT: Endpoint = Endpoint::Teams;
    const NOUN: &'static str = "teams";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_count_defaults_to_zero() {
        let team: Team = serde_json::from_value(json!({
            "id": 1,
            "name": "Team DC",
            "description": "Justice League"
        }))
        .unwrap();

        assert_eq!(team.member_count(), 0);
        assert_eq!(team.description(), "Justice League");
    }
}
