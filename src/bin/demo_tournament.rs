use std::collections::BTreeMap;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wc26_standings::config::{self, AppConfig};
use wc26_standings::logging;
use wc26_standings::state::{DisciplinaryRecord, MatchResult, PredictedMatchup, Team};
use wc26_standings::tournament::{self, LabelledMatch, TournamentInput};

const DEFAULT_SEED: u64 = 2026;
const GROUPS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
const NATIONS: &[&str] = &[
    "Mexico", "South Africa", "Korea Republic", "Czechia",
    "Canada", "Switzerland", "Qatar", "Bosnia",
    "Brazil", "Morocco", "Haiti", "Scotland",
    "USA", "Paraguay", "Australia", "Turkiye",
    "Germany", "Curacao", "Ivory Coast", "Ecuador",
    "Netherlands", "Japan", "Sweden", "Tunisia",
    "Belgium", "Egypt", "Iran", "New Zealand",
    "Spain", "Cape Verde", "Saudi Arabia", "Uruguay",
    "France", "Senegal", "Iraq", "Norway",
    "Argentina", "Algeria", "Austria", "Jordan",
    "Portugal", "DR Congo", "Uzbekistan", "Colombia",
    "England", "Croatia", "Ghana", "Panama",
];
const ROUND_OF_32: &[(u32, &str)] = &[
    (73, "Runner-up A vs Runner-up B"),
    (74, "Winner E vs 3rd Place A/B/C/D/F"),
    (75, "Winner F vs Runner-up C"),
    (76, "Winner C vs Runner-up F"),
    (77, "Winner I vs 3rd Place C/D/F/G/H"),
    (78, "Runner-up E vs Runner-up I"),
    (79, "Winner A vs 3rd Place C/E/F/H/I"),
    (80, "Winner L vs 3rd Place E/H/I/J/K"),
    (81, "Winner D vs 3rd Place B/E/F/I/J"),
    (82, "Winner G vs 3rd Place A/E/H/I/J"),
    (83, "Runner-up K vs Runner-up L"),
    (84, "Winner H vs Runner-up J"),
    (85, "Winner B vs 3rd Place E/F/G/I/J"),
    (86, "Winner J vs Runner-up H"),
    (87, "Winner K vs 3rd Place D/E/I/J/L"),
    (88, "Runner-up D vs Runner-up G"),
];

fn main() -> Result<()> {
    config::load_dotenv();
    let cfg = AppConfig::from_env();
    logging::init(cfg.log_level);

    let seed = std::env::args()
        .nth(1)
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);
    let input = generate_input(seed);
    let snapshot = tournament::run(&input, &cfg.pipeline);

    println!("Demo tournament (seed {seed})");
    for (group, rows) in &snapshot.groups {
        println!("Group {group}");
        for row in rows {
            println!(
                "  {:>2}. {:<16} P{} W{} D{} L{} {:>2}:{:<2} GD{:+} FP{:>3} {:>2} pts{}",
                row.rank,
                row.team_name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goals_for,
                row.goals_against,
                row.goal_difference(),
                row.fair_play_points,
                row.points(),
                row.predicted_rank
                    .map(|r| format!("  (predicted {r})"))
                    .unwrap_or_default()
            );
        }
    }

    println!("Best third-placed teams");
    for (idx, row) in snapshot.third_place.iter().enumerate() {
        println!("  {}. {} ({}) {} pts", idx + 1, row.team_name, row.group, row.points());
    }

    println!("Round of 32");
    for m in &snapshot.bracket {
        println!(
            "  #{} {} vs {}  [{} vs {}]",
            m.match_number, m.home_team, m.away_team, m.home_label, m.away_label
        );
    }

    Ok(())
}

fn generate_input(seed: u64) -> TournamentInput {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut teams = Vec::new();
    let mut results = BTreeMap::new();
    let mut cards = BTreeMap::new();
    let mut predictions = Vec::new();

    for (group, names) in GROUPS.iter().zip(NATIONS.chunks(4)) {
        teams.extend(names.iter().map(|name| Team {
            name: name.to_string(),
            group: group.to_string(),
            is_placeholder: false,
        }));

        let mut group_results = Vec::new();
        for (i, home) in names.iter().enumerate() {
            for away in &names[i + 1..] {
                group_results.push(MatchResult::new(
                    home,
                    away,
                    rng.gen_range(0..=3),
                    rng.gen_range(0..=3),
                ));
                predictions.push(PredictedMatchup {
                    home_team: home.to_string(),
                    away_team: away.to_string(),
                    predicted_home_score: Some(rng.gen_range(0..=2)),
                    predicted_away_score: Some(rng.gen_range(0..=2)),
                });
            }
        }
        results.insert(group.to_string(), group_results);

        let group_cards = names
            .iter()
            .map(|name| DisciplinaryRecord {
                team_name: name.to_string(),
                yellow: rng.gen_range(0..=6),
                second_yellow: u32::from(rng.gen_bool(0.1)),
                red: u32::from(rng.gen_bool(0.05)),
            })
            .collect();
        cards.insert(group.to_string(), group_cards);
    }

    let knockout_labels = ROUND_OF_32
        .iter()
        .map(|(number, label)| LabelledMatch {
            match_number: *number,
            stage_id: 2,
            match_label: label.to_string(),
            venue: String::new(),
            kickoff_at: String::new(),
        })
        .collect();

    TournamentInput {
        teams,
        results,
        cards,
        predictions,
        knockout: Vec::new(),
        knockout_labels,
    }
}
