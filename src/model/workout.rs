use crate::api::Endpoint;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// A suggested workout plan.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub difficulty_level: String,
    pub estimated_duration_minutes: i64,
    pub points_value: i64,
    pub category: String,
    pub equipment_needed: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for Workout {
    const ENDPOINT: Endpoint = Endpoint::Workouts;
    const NOUN: &'static str = "workouts";

    fn record_id(&self) -> RecordId {
        self.id
    }
}
