use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const TBD: &str = "TBD";

// Round of 32.
pub const DEFAULT_KNOCKOUT_STAGE: u32 = 2;

pub type GroupStandings = BTreeMap<String, Vec<StandingRow>>;

pub type PredictedRanks = BTreeMap<String, u32>;

/// Only raw counters are stored; `goal_difference()` and `points()` are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team_name: String,
    pub group: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    // Always <= 0.
    pub fair_play_points: i32,
    // 0 until sorted.
    pub rank: u32,
    pub predicted_rank: Option<u32>,
}

impl StandingRow {
    pub fn new(team_name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            group: group.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            fair_play_points: 0,
            rank: 0,
            predicted_rank: None,
        }
    }

    pub fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Less => self.lost += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    pub fn points(&self) -> u32 {
        3 * self.won + self.drawn
    }
}

impl Serialize for StandingRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("StandingRow", 13)?;
        s.serialize_field("team_name", &self.team_name)?;
        s.serialize_field("group", &self.group)?;
        s.serialize_field("rank", &self.rank)?;
        s.serialize_field("played", &self.played)?;
        s.serialize_field("won", &self.won)?;
        s.serialize_field("drawn", &self.drawn)?;
        s.serialize_field("lost", &self.lost)?;
        s.serialize_field("goals_for", &self.goals_for)?;
        s.serialize_field("goals_against", &self.goals_against)?;
        s.serialize_field("goal_difference", &self.goal_difference())?;
        s.serialize_field("points", &self.points())?;
        s.serialize_field("fair_play_points", &self.fair_play_points)?;
        s.serialize_field("predicted_rank", &self.predicted_rank)?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
}

impl MatchResult {
    pub fn new(home: &str, away: &str, home_score: u8, away_score: u8) -> Self {
        Self {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score,
            away_score,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinaryRecord {
    pub team_name: String,
    #[serde(default)]
    pub yellow: u32,
    #[serde(default)]
    pub second_yellow: u32,
    #[serde(default)]
    pub red: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedMatchup {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub predicted_home_score: Option<u8>,
    #[serde(default)]
    pub predicted_away_score: Option<u8>,
}

impl PredictedMatchup {
    pub fn scoreline(&self) -> Option<(u8, u8)> {
        Some((self.predicted_home_score?, self.predicted_away_score?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub group: String,
    #[serde(default)]
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutFixture {
    pub match_number: u32,
    #[serde(default = "default_stage")]
    pub stage_id: u32,
    pub home_label: String,
    pub away_label: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub kickoff_at: String,
}

fn default_stage() -> u32 {
    DEFAULT_KNOCKOUT_STAGE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub match_number: u32,
    pub stage_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub kickoff_at: String,
    pub home_label: String,
    pub away_label: String,
}

impl BracketMatch {
    pub fn is_fully_resolved(&self) -> bool {
        self.home_team != TBD && self.away_team != TBD
    }
}
