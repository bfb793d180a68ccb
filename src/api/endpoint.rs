use crate::model::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
    User(RecordId),
}

impl Endpoint {
    /// Path relative to the API base URL, with the trailing slash the API expects.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Activities => "/activities/".to_string(),
            Endpoint::Leaderboard => "/leaderboard/".to_string(),
            Endpoint::Teams => "/teams/".to_string(),
            Endpoint::Users => "/users/".to_string(),
            Endpoint::Workouts => "/workouts/".to_string(),
            Endpoint::User(id) => format!("/users/{id}/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Endpoint::Activities.path(), "/activities/");
        assert_eq!(Endpoint::Leaderboard.path(), "/leaderboard/");
        assert_eq!(Endpoint::User(7).path(), "/users/7/");
    }
}
