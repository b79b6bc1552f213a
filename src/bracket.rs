use std::collections::BTreeMap;
use std::fmt;

use log::warn;

use crate::state::{BracketMatch, GroupStandings, KnockoutFixture, StandingRow, TBD};

const WINNER_PREFIX: &str = "Winner ";
const RUNNER_UP_PREFIX: &str = "Runner-up ";
const THIRD_PLACE_PREFIX: &str = "3rd Place ";
const VERSUS: &str = " vs ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderLabel {
    Winner(String),
    RunnerUp(String),
    ThirdPlace(Vec<String>),
    Literal(String),
}

impl PlaceholderLabel {
    pub fn parse(raw: &str) -> Self {
        if let Some(group) = raw.strip_prefix(WINNER_PREFIX) {
            return PlaceholderLabel::Winner(group.trim().to_string());
        }
        if let Some(group) = raw.strip_prefix(RUNNER_UP_PREFIX) {
            return PlaceholderLabel::RunnerUp(group.trim().to_string());
        }
        if let Some(groups) = raw.strip_prefix(THIRD_PLACE_PREFIX) {
            let candidates = groups
                .split('/')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect();
            return PlaceholderLabel::ThirdPlace(candidates);
        }
        PlaceholderLabel::Literal(raw.to_string())
    }
}

impl fmt::Display for PlaceholderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderLabel::Winner(group) => write!(f, "{WINNER_PREFIX}{group}"),
            PlaceholderLabel::RunnerUp(group) => write!(f, "{RUNNER_UP_PREFIX}{group}"),
            PlaceholderLabel::ThirdPlace(groups) => {
                write!(f, "{THIRD_PLACE_PREFIX}{}", groups.join("/"))
            }
            PlaceholderLabel::Literal(raw) => f.write_str(raw),
        }
    }
}

impl KnockoutFixture {
    pub fn from_match_label(
        match_number: u32,
        stage_id: u32,
        match_label: &str,
        venue: &str,
        kickoff_at: &str,
    ) -> Option<Self> {
        let (home_label, away_label) = split_match_label(match_label)?;
        Some(Self {
            match_number,
            stage_id,
            home_label,
            away_label,
            venue: venue.to_string(),
            kickoff_at: kickoff_at.to_string(),
        })
    }
}

pub fn split_match_label(match_label: &str) -> Option<(String, String)> {
    let mut parts = match_label.split(VERSUS);
    let home = parts.next()?.trim();
    let away = parts.next()?.trim();
    if parts.next().is_some() || home.is_empty() || away.is_empty() {
        return None;
    }
    Some((home.to_string(), away.to_string()))
}

/// Slots that cannot be filled yet become `"TBD"`.
pub fn resolve(
    groups: &GroupStandings,
    third_place_qualifiers: &[StandingRow],
    fixtures: &[KnockoutFixture],
) -> Vec<BracketMatch> {
    let third_by_group: BTreeMap<&str, &str> = third_place_qualifiers
        .iter()
        .map(|row| (row.group.as_str(), row.team_name.as_str()))
        .collect();

    fixtures
        .iter()
        .map(|fixture| BracketMatch {
            match_number: fixture.match_number,
            stage_id: fixture.stage_id,
            home_team: resolve_label(&fixture.home_label, groups, &third_by_group),
            away_team: resolve_label(&fixture.away_label, groups, &third_by_group),
            venue: fixture.venue.clone(),
            kickoff_at: fixture.kickoff_at.clone(),
            home_label: fixture.home_label.clone(),
            away_label: fixture.away_label.clone(),
        })
        .collect()
}

fn resolve_label(
    raw: &str,
    groups: &GroupStandings,
    third_by_group: &BTreeMap<&str, &str>,
) -> String {
    let resolved = match PlaceholderLabel::parse(raw) {
        PlaceholderLabel::Winner(group) => team_at_rank(groups, &group, 1),
        PlaceholderLabel::RunnerUp(group) => team_at_rank(groups, &group, 2),
        PlaceholderLabel::ThirdPlace(candidates) => candidates
            .iter()
            .find_map(|group| third_by_group.get(group.as_str()).copied()),
        PlaceholderLabel::Literal(raw) => return raw,
    };
    match resolved {
        Some(team) => team.to_string(),
        None => {
            warn!("bracket slot {raw:?} cannot be resolved yet, using {TBD}");
            TBD.to_string()
        }
    }
}

fn team_at_rank<'a>(groups: &'a GroupStandings, group: &str, rank: u32) -> Option<&'a str> {
    groups
        .get(group)?
        .iter()
        .find(|row| row.rank == rank)
        .map(|row| row.team_name.as_str())
}
