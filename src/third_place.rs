use crate::state::{GroupStandings, StandingRow};
use crate::tiebreak;

pub const DEFAULT_THIRD_PLACE_SLOTS: usize = 8;

pub fn select_top(groups: &GroupStandings, n: usize) -> Vec<StandingRow> {
    let candidates: Vec<StandingRow> = groups
        .values()
        .filter_map(|rows| rows.get(2))
        .cloned()
        .collect();

    let mut ranked = tiebreak::sort(candidates, None);
    ranked.truncate(n);
    for row in ranked.iter_mut() {
        row.rank = 3;
    }
    ranked
}
