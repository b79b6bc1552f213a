use wc26_standings::standings::{compute, fair_play_points, initialize_empty};
use wc26_standings::state::{DisciplinaryRecord, MatchResult, StandingRow};
use wc26_standings::tiebreak::sort;

fn card(team: &str, yellow: u32, second_yellow: u32, red: u32) -> DisciplinaryRecord {
    DisciplinaryRecord {
        team_name: team.to_string(),
        yellow,
        second_yellow,
        red,
    }
}

fn by_name<'a>(rows: &'a [StandingRow], name: &str) -> &'a StandingRow {
    rows.iter()
        .find(|r| r.team_name == name)
        .expect("team should have a row")
}

fn names(rows: &[StandingRow]) -> Vec<String> {
    rows.iter().map(|r| r.team_name.clone()).collect()
}

#[test]
fn win_draw_loss_points() {
    let results = vec![
        MatchResult::new("Team A", "Team B", 2, 0),
        MatchResult::new("Team C", "Team D", 1, 1),
    ];
    let rows = compute("A", &results, None);
    assert_eq!(by_name(&rows, "Team A").points(), 3);
    assert_eq!(by_name(&rows, "Team B").points(), 0);
    assert_eq!(by_name(&rows, "Team C").points(), 1);
    assert_eq!(by_name(&rows, "Team D").points(), 1);
}

#[test]
fn goal_difference_is_for_minus_against() {
    let rows = compute("A", &[MatchResult::new("Team A", "Team B", 3, 1)], None);
    let a = by_name(&rows, "Team A");
    let b = by_name(&rows, "Team B");
    assert_eq!((a.goals_for, a.goals_against, a.goal_difference()), (3, 1, 2));
    assert_eq!((b.goals_for, b.goals_against, b.goal_difference()), (1, 3, -2));
}

#[test]
fn points_are_conserved_across_results() {
    let results = vec![
        MatchResult::new("Spain", "Uruguay", 2, 2),
        MatchResult::new("Spain", "Cape Verde", 4, 0),
        MatchResult::new("Saudi Arabia", "Uruguay", 1, 0),
        MatchResult::new("Cape Verde", "Saudi Arabia", 0, 0),
        MatchResult::new("Uruguay", "Cape Verde", 3, 1),
        MatchResult::new("Saudi Arabia", "Spain", 0, 1),
    ];
    let decisive = results.iter().filter(|r| !r.is_draw()).count() as u32;
    let drawn = results.iter().filter(|r| r.is_draw()).count() as u32;

    let rows = compute("H", &results, None);
    let total: u32 = rows.iter().map(|r| r.points()).sum();
    assert_eq!(total, 3 * decisive + 2 * drawn);

    for row in &rows {
        assert_eq!(row.played, row.won + row.drawn + row.lost);
        assert_eq!(row.goal_difference(), row.goals_for as i32 - row.goals_against as i32);
    }
    let gd_sum: i32 = rows.iter().map(|r| r.goal_difference()).sum();
    assert_eq!(gd_sum, 0);
}

#[test]
fn sorts_by_points_then_goal_difference_then_goals_for() {
    let results = vec![
        MatchResult::new("Team A", "Team B", 1, 0),
        MatchResult::new("Team C", "Team D", 2, 1),
        MatchResult::new("Team E", "Team F", 3, 0),
    ];
    let rows = sort(compute("A", &results, None), None);
    assert_eq!(&names(&rows)[..3], &["Team E", "Team C", "Team A"]);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn fair_play_deductions() {
    let cards = vec![
        card("Team A", 1, 0, 0),
        card("Team B", 0, 0, 1),
        card("Team C", 1, 1, 0),
        card("Team D", 0, 0, 0),
    ];
    let rows = compute("A", &[], Some(&cards));
    assert_eq!(rows.len(), 4);
    assert_eq!(by_name(&rows, "Team A").fair_play_points, -1);
    assert_eq!(by_name(&rows, "Team B").fair_play_points, -4);
    assert_eq!(by_name(&rows, "Team C").fair_play_points, -3);
    assert_eq!(by_name(&rows, "Team D").fair_play_points, 0);
    assert!(rows.iter().all(|r| r.played == 0));
    assert_eq!(fair_play_points(&card("X", 2, 1, 1)), -8);
}

#[test]
fn yellow_only_team_outranks_red_card_team() {
    let rows = vec![StandingRow::new("Red", "B"), StandingRow::new("Yellow", "B")];
    let cards = vec![card("Yellow", 1, 0, 0), card("Red", 0, 0, 1)];
    let mut rows = rows;
    for row in rows.iter_mut() {
        let record = cards.iter().find(|c| c.team_name == row.team_name).unwrap();
        row.fair_play_points = fair_play_points(record);
    }
    let sorted = sort(rows, None);
    assert_eq!(names(&sorted), vec!["Yellow", "Red"]);
}

#[test]
fn mexico_beats_poland_on_fair_play() {
    let results = vec![
        MatchResult::new("Mexico", "Poland", 0, 0),
        MatchResult::new("Mexico", "Team C", 2, 1),
        MatchResult::new("Poland", "Team C", 2, 1),
        MatchResult::new("Team D", "Mexico", 1, 1),
        MatchResult::new("Team D", "Poland", 1, 1),
    ];
    let cards = vec![card("Mexico", 1, 0, 0), card("Poland", 0, 0, 1)];
    let rows = sort(compute("C", &results, Some(&cards)), None);

    let mexico = by_name(&rows, "Mexico");
    let poland = by_name(&rows, "Poland");
    assert_eq!(mexico.points(), poland.points());
    assert_eq!(mexico.goal_difference(), poland.goal_difference());
    assert_eq!(mexico.goals_for, poland.goals_for);
    assert!(mexico.rank < poland.rank);
}

#[test]
fn identical_inputs_give_identical_order() {
    let results = vec![
        MatchResult::new("Iran", "Egypt", 1, 1),
        MatchResult::new("Belgium", "New Zealand", 1, 1),
        MatchResult::new("Iran", "New Zealand", 0, 0),
        MatchResult::new("Belgium", "Egypt", 0, 0),
    ];
    let first = sort(compute("G", &results, None), None);
    let mut reversed = results.clone();
    reversed.reverse();
    let second = sort(compute("G", &reversed, None), None);
    assert_eq!(names(&first), names(&second));
    assert_eq!(first, sort(compute("G", &results, None), None));
}

#[test]
fn empty_inputs_give_empty_table() {
    assert!(compute("A", &[], None).is_empty());
    assert!(sort(Vec::new(), None).is_empty());
}

#[test]
fn initialized_group_is_ranked_in_roster_order() {
    let roster: Vec<String> = ["Mexico", "South Africa", "Korea Republic", "Czechia"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = initialize_empty("A", &roster);
    assert_eq!(names(&rows), roster);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert!(rows.iter().all(|r| r.points() == 0 && r.played == 0 && r.group == "A"));
}
