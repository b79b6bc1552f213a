use std::collections::HashMap;

use crate::state::{DisciplinaryRecord, MatchResult, StandingRow};

const YELLOW_PENALTY: i64 = -1;
// Charged on top of the yellow that preceded it, so a second-yellow dismissal nets -3.
const SECOND_YELLOW_PENALTY: i64 = -2;
const RED_PENALTY: i64 = -4;

/// Saturates at `i32::MIN`.
pub fn fair_play_points(record: &DisciplinaryRecord) -> i32 {
    let total = i64::from(record.yellow) * YELLOW_PENALTY
        + i64::from(record.second_yellow) * SECOND_YELLOW_PENALTY
        + i64::from(record.red) * RED_PENALTY;
    total.clamp(i64::from(i32::MIN), 0) as i32
}

pub fn compute(
    group: &str,
    results: &[MatchResult],
    cards: Option<&[DisciplinaryRecord]>,
) -> Vec<StandingRow> {
    compute_with_roster(group, &[], results, cards)
}

/// Like [`compute`], but roster teams get a row even before they play.
pub fn compute_with_roster(
    group: &str,
    roster: &[String],
    results: &[MatchResult],
    cards: Option<&[DisciplinaryRecord]>,
) -> Vec<StandingRow> {
    let mut table = Table::new(group);
    for name in roster {
        table.row_mut(name);
    }
    for result in results {
        table.row_mut(&result.home_team);
        table.row_mut(&result.away_team);
    }
    for card in cards.unwrap_or_default() {
        table.row_mut(&card.team_name);
    }

    for result in results {
        table
            .row_mut(&result.home_team)
            .record(result.home_score, result.away_score);
        table
            .row_mut(&result.away_team)
            .record(result.away_score, result.home_score);
    }

    for card in cards.unwrap_or_default() {
        let row = table.row_mut(&card.team_name);
        row.fair_play_points = row.fair_play_points.saturating_add(fair_play_points(card));
    }

    table.rows
}

pub fn initialize_empty(group: &str, team_names: &[String]) -> Vec<StandingRow> {
    team_names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let mut row = StandingRow::new(name.as_str(), group);
            row.rank = idx as u32 + 1;
            row
        })
        .collect()
}

// Rows kept in first-seen order; the index only speeds up lookups.
struct Table {
    group: String,
    rows: Vec<StandingRow>,
    index: HashMap<String, usize>,
}

impl Table {
    fn new(group: &str) -> Self {
        Self {
            group: group.to_string(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn row_mut(&mut self, team: &str) -> &mut StandingRow {
        let idx = match self.index.get(team) {
            Some(idx) => *idx,
            None => {
                self.rows.push(StandingRow::new(team, self.group.as_str()));
                self.index.insert(team.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[idx]
    }
}
