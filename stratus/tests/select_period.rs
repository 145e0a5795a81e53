mod helpers;

use chrono::Local;
use helpers::{period, today_start, yesterday_start};
use stratus::select_period;

#[test]
fn prefers_the_period_starting_today() {
    let periods = vec![
        period("Tonight", yesterday_start(), 55.0, "F"),
        period("Today", today_start(), 72.0, "F"),
    ];

    let chosen = select_period(&periods, Local::now().date_naive());
    assert_eq!(chosen.name, "Today");
}

#[test]
fn falls_back_to_the_first_period_when_no_start_matches() {
    let periods = vec![period("Tonight", yesterday_start(), 55.0, "F")];

    let chosen = select_period(&periods, Local::now().date_naive());
    assert_eq!(chosen.name, "Tonight");
}

#[test]
fn first_match_wins_when_several_periods_start_today() {
    let periods = vec![
        period("Today", today_start(), 72.0, "F"),
        period("Tonight", today_start(), 58.0, "F"),
    ];

    let chosen = select_period(&periods, Local::now().date_naive());
    assert_eq!(chosen.name, "Today");
}
