use std::collections::BTreeMap;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wc26_standings::config::PipelineConfig;
use wc26_standings::standings;
use wc26_standings::state::{DisciplinaryRecord, MatchResult, PredictedMatchup, Team};
use wc26_standings::tiebreak;
use wc26_standings::tournament::{self, LabelledMatch, TournamentInput};

const GROUPS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

fn round_robin(group: &str) -> (Vec<String>, Vec<MatchResult>) {
    let names: Vec<String> = (1..=4).map(|idx| format!("Team {group}{idx}")).collect();
    let mut results = Vec::new();
    for (i, home) in names.iter().enumerate() {
        for (j, away) in names.iter().enumerate().skip(i + 1) {
            results.push(MatchResult::new(home, away, ((i + j) % 3) as u8, (j % 2) as u8));
        }
    }
    (names, results)
}

fn sample_input() -> TournamentInput {
    let mut teams = Vec::new();
    let mut results = BTreeMap::new();
    let mut cards = BTreeMap::new();
    let mut predictions = Vec::new();
    for group in GROUPS {
        let (names, group_results) = round_robin(group);
        for name in &names {
            teams.push(Team {
                name: name.clone(),
                group: group.to_string(),
                is_placeholder: false,
            });
        }
        predictions.extend(group_results.iter().map(|r| PredictedMatchup {
            home_team: r.home_team.clone(),
            away_team: r.away_team.clone(),
            predicted_home_score: Some(1),
            predicted_away_score: Some(1),
        }));
        cards.insert(
            group.to_string(),
            vec![DisciplinaryRecord {
                team_name: names[0].clone(),
                yellow: 2,
                ..Default::default()
            }],
        );
        results.insert(group.to_string(), group_results);
    }
    let knockout_labels = GROUPS
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| LabelledMatch {
            match_number: 73 + idx as u32,
            stage_id: 2,
            match_label: format!("Winner {} vs 3rd Place {}/{}", pair[0], pair[1], pair[0]),
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

fn bench_group_sort(c: &mut Criterion) {
    let (_, results) = round_robin("A");
    c.bench_function("group_compute_and_sort", |b| {
        b.iter(|| {
            let rows = standings::compute("A", black_box(&results), None);
            black_box(tiebreak::sort(rows, None));
        })
    });
}

fn bench_full_tournament(c: &mut Criterion) {
    let input = sample_input();
    let cfg = PipelineConfig::default();
    c.bench_function("full_tournament_snapshot", |b| {
        b.iter(|| {
            let snapshot = tournament::run(black_box(&input), &cfg);
            black_box(snapshot.bracket.len());
        })
    });
}

criterion_group!(benches, bench_group_sort, bench_full_tournament);
criterion_main!(benches);
