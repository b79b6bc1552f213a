use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bracket;
use crate::config::PipelineConfig;
use crate::predicted;
use crate::standings;
use crate::state::{
    BracketMatch, DisciplinaryRecord, GroupStandings, KnockoutFixture, MatchResult,
    PredictedMatchup, PredictedRanks, StandingRow, Team, DEFAULT_KNOCKOUT_STAGE,
};
use crate::third_place;
use crate::tiebreak;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledMatch {
    pub match_number: u32,
    #[serde(default = "default_stage")]
    pub stage_id: u32,
    pub match_label: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub kickoff_at: String,
}

fn default_stage() -> u32 {
    DEFAULT_KNOCKOUT_STAGE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentInput {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub results: BTreeMap<String, Vec<MatchResult>>,
    #[serde(default)]
    pub cards: BTreeMap<String, Vec<DisciplinaryRecord>>,
    #[serde(default)]
    pub predictions: Vec<PredictedMatchup>,
    #[serde(default)]
    pub knockout: Vec<KnockoutFixture>,
    #[serde(default)]
    pub knockout_labels: Vec<LabelledMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TournamentSnapshot {
    pub updated_at: String,
    pub groups: GroupStandings,
    pub third_place: Vec<StandingRow>,
    pub bracket: Vec<BracketMatch>,
    pub predicted_ranks: BTreeMap<String, PredictedRanks>,
    pub errors: Vec<String>,
}

impl TournamentSnapshot {
    pub fn resolved_slots(&self) -> usize {
        self.bracket
            .iter()
            .flat_map(|m| [&m.home_team, &m.away_team])
            .filter(|team| team.as_str() != crate::state::TBD)
            .count()
    }
}

struct GroupOutcome {
    rows: Vec<StandingRow>,
    predicted: PredictedRanks,
    started: bool,
    notes: Vec<String>,
}

pub fn run(input: &TournamentInput, cfg: &PipelineConfig) -> TournamentSnapshot {
    run_at(input, cfg, Utc::now())
}

/// Same as [`run`] with a fixed timestamp, so the whole snapshot is reproducible.
pub fn run_at(
    input: &TournamentInput,
    cfg: &PipelineConfig,
    updated_at: DateTime<Utc>,
) -> TournamentSnapshot {
    let rosters = group_rosters(&input.teams);
    let group_ids: BTreeSet<&str> = rosters
        .keys()
        .map(String::as_str)
        .chain(input.results.keys().map(String::as_str))
        .chain(input.cards.keys().map(String::as_str))
        .collect();

    let outcomes: Vec<(String, GroupOutcome)> = group_ids
        .into_iter()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|group| {
            let roster = rosters.get(*group).map(Vec::as_slice).unwrap_or_default();
            let results = input.results.get(*group).map(Vec::as_slice).unwrap_or_default();
            let cards = input.cards.get(*group).map(Vec::as_slice).unwrap_or_default();
            let outcome = compute_group(group, roster, results, cards, &input.predictions, cfg);
            (group.to_string(), outcome)
        })
        .collect();

    let mut errors = Vec::new();
    let mut groups = GroupStandings::new();
    let mut started = GroupStandings::new();
    let mut predicted_ranks = BTreeMap::new();
    for (group, outcome) in outcomes {
        errors.extend(outcome.notes);
        if !outcome.predicted.is_empty() {
            predicted_ranks.insert(group.clone(), outcome.predicted);
        }
        if outcome.started {
            started.insert(group.clone(), outcome.rows.clone());
        }
        groups.insert(group, outcome.rows);
    }

    let third_place = third_place::select_top(&started, cfg.third_place_slots);

    let mut fixtures = input.knockout.clone();
    for labelled in &input.knockout_labels {
        match KnockoutFixture::from_match_label(
            labelled.match_number,
            labelled.stage_id,
            &labelled.match_label,
            &labelled.venue,
            &labelled.kickoff_at,
        ) {
            Some(fixture) => fixtures.push(fixture),
            None => {
                warn!(
                    "match {} has unusable label {:?}",
                    labelled.match_number, labelled.match_label
                );
                errors.push(format!(
                    "match {}: label {:?} is not of the form \"<home> vs <away>\"",
                    labelled.match_number, labelled.match_label
                ));
            }
        }
    }
    fixtures.sort_by_key(|f| f.match_number);

    // Unplayed groups stay out of resolution so their slots read TBD, not roster order.
    let bracket = bracket::resolve(&started, &third_place, &fixtures);

    info!(
        "standings for {} groups ({} started), {} third-place qualifiers, {} bracket matches",
        groups.len(),
        started.len(),
        third_place.len(),
        bracket.len()
    );

    TournamentSnapshot {
        updated_at: updated_at.to_rfc3339(),
        groups,
        third_place,
        bracket,
        predicted_ranks,
        errors,
    }
}

fn group_rosters(teams: &[Team]) -> BTreeMap<String, Vec<String>> {
    let mut rosters: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for team in teams {
        if team.is_placeholder || team.group.trim().is_empty() {
            continue;
        }
        let roster = rosters.entry(team.group.trim().to_string()).or_default();
        if !roster.contains(&team.name) {
            roster.push(team.name.clone());
        }
    }
    rosters
}

fn compute_group(
    group: &str,
    roster: &[String],
    results: &[MatchResult],
    cards: &[DisciplinaryRecord],
    predictions: &[PredictedMatchup],
    cfg: &PipelineConfig,
) -> GroupOutcome {
    if results.is_empty() && cards.is_empty() {
        debug!("group {group}: no results yet, roster order");
        return GroupOutcome {
            rows: standings::initialize_empty(group, roster),
            predicted: PredictedRanks::new(),
            started: false,
            notes: Vec::new(),
        };
    }

    let mut notes = Vec::new();
    if !roster.is_empty() {
        let unknown: BTreeSet<&str> = results
            .iter()
            .flat_map(|r| [r.home_team.as_str(), r.away_team.as_str()])
            .filter(|name| !roster.iter().any(|t| t == name))
            .collect();
        for name in unknown {
            notes.push(format!("group {group}: result references {name:?} outside the roster"));
        }
    }

    let rows = standings::compute_with_roster(group, roster, results, Some(cards));
    let predicted = if cfg.use_predicted_tiebreak {
        let names: Vec<String> = rows.iter().map(|r| r.team_name.clone()).collect();
        predicted::simulate(group, &names, predictions)
    } else {
        PredictedRanks::new()
    };
    let tiebreak_ranks = (!predicted.is_empty()).then_some(&predicted);
    let rows = tiebreak::sort(rows, tiebreak_ranks);
    debug!(
        "group {group}: leader {}",
        rows.first().map(|r| r.team_name.as_str()).unwrap_or("-")
    );

    GroupOutcome {
        rows,
        predicted,
        started: !results.is_empty(),
        notes,
    }
}
