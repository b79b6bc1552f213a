use std::collections::HashSet;

use crate::standings;
use crate::state::{MatchResult, PredictedMatchup, PredictedRanks};
use crate::tiebreak;

/// Empty when no scored matchup falls inside the group.
pub fn simulate(
    group: &str,
    team_names: &[String],
    matchups: &[PredictedMatchup],
) -> PredictedRanks {
    let members: HashSet<&str> = team_names.iter().map(String::as_str).collect();
    let results: Vec<MatchResult> = matchups
        .iter()
        .filter(|m| {
            members.contains(m.home_team.as_str()) && members.contains(m.away_team.as_str())
        })
        .filter_map(|m| {
            let (home_score, away_score) = m.scoreline()?;
            Some(MatchResult::new(&m.home_team, &m.away_team, home_score, away_score))
        })
        .collect();

    if results.is_empty() {
        return PredictedRanks::new();
    }

    let rows = standings::compute(group, &results, None);
    tiebreak::sort(rows, None)
        .into_iter()
        .map(|row| (row.team_name, row.rank))
        .collect()
}
