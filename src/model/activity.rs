use crate::api::Endpoint;
use crate::model::{display, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A logged fitness activity.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: RecordId,
    pub user_email: String,
    pub user_name: String,
    pub team: Option<String>,
    pub activity_type: String,
    pub duration_minutes: i64,
    pub points_earned: i64,
    pub date: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl Activity {
    pub fn team_label(&self) -> &str {
        display::team_label(self.team.as_deref())
    }
}

impl Record for Activity {
    const ENDPOINT: Endpoint = Endpoint::Activities;
    const NOUN: &'static str = "activities";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_activity() {
        let activity: Activity = serde_json::from_value(json!({
            "id": 3,
            "user_email": "tony@stark.com",
            "user_name": "Tony Stark",
            "team": null,
            "activity_type": "Running",
            "duration_minutes": 45,
            "points_earned": 90,
            "date": "2024-05-01",
            "notes": "Morning run",
            "created_at": "2024-05-01T07:00:00Z",
            "unexpected": true
        }))
        .unwrap();

        assert_eq!(activity.record_id(), 3);
        assert_eq!(activity.activity_type, "Running");
        assert_eq!(activity.team_label(), "No Team");
    }
}
