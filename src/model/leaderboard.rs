use crate::api::Endpoint;
use crate::model::{display, Record, RecordId};
use serde::{Deserialize, Serialize};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// A row of the competitive ranking.
///
/// The payload `rank` is carried through untouched; displayed rank always
/// comes from the position in the served list, see [`rank_badge`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub id: RecordId,
    pub entity_type: String,
    pub entity_name: String,
    pub team: Option<String>,
    pub total_points: i64,
    pub rank: Option<i64>,
    pub activities_count: Option<i64>,
    pub updated_at: String,
}

impl LeaderboardEntry {
    pub fn activities_count(&self) -> i64 {
        self.activities_count.unwrap_or(0)
    }

    pub fn team_label(&self) -> &str {
        display::team_label(self.team.as_deref())
    }
}

impl Record for LeaderboardEntry {
    const ENDPOINT: Endpoint = Endpoint::Leaderboard;
    const NOUN: &'static str = "leaderboard entries";
    const LOADING_NOUN: &'static str = "leaderboard";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Badge for the entry at `index` (zero based).
pub fn rank_badge(index: usize) -> String {
    MEDALS
        .get(index)
        .map(|medal| (*medal).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

pub fn ranked(entries: &[LeaderboardEntry]) -> Vec<(String, &LeaderboardEntry)> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (rank_badge(index), entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: RecordId, rank: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            id,
            entity_name: format!("Hero {id}"),
            total_points: 1000 - id * 10,
            rank: Some(rank),
            ..Default::default()
        }
    }

    #[test]
    fn medals_for_podium() {
        assert_eq!(rank_badge(0), "🥇");
        assert_eq!(rank_badge(1), "🥈");
        assert_eq!(rank_badge(2), "🥉");
        assert_eq!(rank_badge(3), "4");
        assert_eq!(rank_badge(9), "10");
    }

    #[test]
    fn ranks_follow_position_not_payload() {
        // payload ranks disagree with the served order
        let entries = vec![entry(1, 5), entry(2, 1), entry(3, 4), entry(4, 2), entry(5, 3)];

        let badges: Vec<String> = ranked(&entries).into_iter().map(|(b, _)| b).collect();

        assert_eq!(badges, vec!["🥇", "🥈", "🥉", "4", "5"]);
        assert_eq!(ranked(&entries)[3].1.id, 4);
    }

    #[test]
    fn activities_count_defaults_to_zero() {
        let entry = entry(1, 1);
        assert_eq!(entry.activities_count(), 0);
        assert_eq!(entry.team_label(), "No Team");
    }
}
