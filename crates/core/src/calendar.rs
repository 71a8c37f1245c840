//! In-game calendar arithmetic.
//!
//! Days count from 1. A week is 7 days (day 1 is a Monday), a season is 28
//! days, a year is 4 seasons. These formulas appear in test expectations and
//! in the seed-derivation formulas, so they are part of the contract.

/// Day of week in 1..=7. Friday is 5, Sunday is 7.
#[inline]
pub fn day_of_week(day: i32) -> i32 {
    ((day - 1).rem_euclid(7)) + 1
}

/// Season index 0..=3 (Spring, Summer, Fall, Winter).
#[inline]
pub fn season(day: i32) -> i32 {
    ((day - 1) / 28) % 4
}

/// Year counting from 1.
#[inline]
pub fn year(day: i32) -> i32 {
    (day - 1) / 112 + 1
}

/// Day within the current season, 1..=28.
#[inline]
pub fn day_of_month(day: i32) -> i32 {
    ((day - 1) % 28) + 1
}

/// Day within the current year, 1..=112.
#[inline]
pub fn day_of_year(day: i32) -> i32 {
    ((day - 1) % 112) + 1
}

/// The traveling vendor sets up on Fridays and Sundays.
#[inline]
pub fn is_cart_day(day: i32) -> bool {
    let dow = day_of_week(day);
    dow == 5 || dow == 7
}

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const SEASON_NAMES: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// Human-readable label, e.g. day 1 is `"Mon, Spring 1, Year 1"`.
pub fn day_label(day: i32) -> String {
    format!(
        "{}, {} {}, Year {}",
        WEEKDAY_NAMES[(day_of_week(day) - 1) as usize],
        SEASON_NAMES[season(day) as usize],
        day_of_month(day),
        year(day)
    )
}
