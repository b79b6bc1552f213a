use std::cmp::Reverse;

use sha2::{Digest, Sha256};

use crate::state::{PredictedRanks, StandingRow};

pub const UNPREDICTED_RANK: u32 = u32::MAX;

// Must not depend on a per-process hash seed.
pub fn stable_name_digest(team_name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(team_name.as_bytes());
    hasher.finalize().into()
}

type SortKey = (Reverse<u32>, Reverse<i32>, Reverse<u32>, Reverse<i32>, u32, [u8; 32]);

fn sort_key(row: &StandingRow, predicted: Option<&PredictedRanks>) -> SortKey {
    let predicted_rank = match predicted {
        Some(ranks) => ranks.get(&row.team_name).copied().unwrap_or(UNPREDICTED_RANK),
        None => 0,
    };
    (
        Reverse(row.points()),
        Reverse(row.goal_difference()),
        Reverse(row.goals_for),
        Reverse(row.fair_play_points),
        predicted_rank,
        stable_name_digest(&row.team_name),
    )
}

/// `None` skips the predicted-rank step; no default rank is guessed.
pub fn sort(mut rows: Vec<StandingRow>, predicted: Option<&PredictedRanks>) -> Vec<StandingRow> {
    rows.sort_by_cached_key(|row| sort_key(row, predicted));
    if let Some(ranks) = predicted {
        for row in rows.iter_mut() {
            row.predicted_rank = ranks.get(&row.team_name).copied();
        }
    }
    assign_ranks(&mut rows);
    rows
}

pub fn assign_ranks(rows: &mut [StandingRow]) {
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = idx as u32 + 1;
    }
}
