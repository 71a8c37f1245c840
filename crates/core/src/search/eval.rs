//! Per-seed filter evaluation.
//!
//! A flat recursive walk with short-circuiting. Each condition loops over its
//! day window and calls the matching mechanic; one relevant day is enough.

use crate::calendar::is_cart_day;
use crate::mechanics;
use crate::search::filter::{Condition, EventTarget, FilterNode, GroupLogic, WeatherTarget};
use crate::version::GameVersion;

/// Bottom of the mines; geode conditions assume a finished elevator.
const DEEPEST_MINE_LEVEL: i32 = 120;

/// Does `seed` satisfy the filter?
pub fn evaluate_filter(seed: i32, filter: &FilterNode, version: GameVersion) -> bool {
    match filter {
        FilterNode::Group { logic: GroupLogic::And, children } => {
            children.iter().all(|child| evaluate_filter(seed, child, version))
        }
        FilterNode::Group { logic: GroupLogic::Or, children } => {
            children.iter().any(|child| evaluate_filter(seed, child, version))
        }
        FilterNode::Condition(condition) => evaluate_condition(seed, condition, version),
    }
}

fn evaluate_condition(seed: i32, condition: &Condition, version: GameVersion) -> bool {
    match condition {
        Condition::DailyLuck { days, min_luck, max_luck } => days.days().any(|day| {
            let luck = mechanics::daily_luck(seed, day);
            *min_luck <= luck && luck <= *max_luck
        }),

        Condition::CartItem { days, item_id, max_price } => days
            .days()
            .filter(|&day| is_cart_day(day))
            .any(|day| mechanics::cart_has_item(seed, day, *item_id, *max_price, version)),

        Condition::NightEvent { days, target } => days.days().any(|day| {
            let event = mechanics::night_event(seed, day, version);
            match target {
                EventTarget::Any => event != mechanics::NightEvent::None,
                EventTarget::Is(wanted) => event == *wanted,
            }
        }),

        Condition::Geode { number, geode_type, target_items } => {
            let result =
                mechanics::geode_item(seed, 0, *number, *geode_type, DEEPEST_MINE_LEVEL, version);
            target_items.contains(&result.item_id)
        }

        Condition::DishOfDay { days, dish_id } => {
            days.days().any(|day| mechanics::dish_of_day(seed, day).id == *dish_id)
        }

        Condition::Weather { days, target } => days.days().any(|day| {
            let weather = mechanics::weather_tomorrow(seed, day, version);
            match target {
                WeatherTarget::Any => weather != mechanics::Weather::Sunny,
                WeatherTarget::Is(wanted) => weather == *wanted,
            }
        }),

        Condition::MineFloor {
            days,
            floor_start,
            floor_end,
            no_monsters,
            no_dark,
            has_mushroom,
        } => days.days().any(|day| {
            mine_day_matches(
                seed,
                day,
                *floor_start,
                *floor_end,
                *no_monsters,
                *no_dark,
                *has_mushroom,
                version,
            )
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn mine_day_matches(
    seed: i32,
    day: i32,
    floor_start: i32,
    floor_end: i32,
    no_monsters: bool,
    no_dark: bool,
    has_mushroom: bool,
    version: GameVersion,
) -> bool {
    if no_monsters {
        let infested =
            (floor_start..=floor_end).any(|f| mechanics::mine::is_infested_floor(seed, day, f, version));
        if infested {
            return false;
        }
    }
    if no_dark {
        let dark = (floor_start..=floor_end).any(|f| mechanics::mine::is_dark_floor(seed, day, f));
        if dark {
            return false;
        }
    }
    if has_mushroom {
        // Blooms never happen above floor 81, so clip the window first.
        let lo = floor_start.max(81);
        if lo > floor_end {
            return false;
        }
        let bloom =
            (lo..=floor_end).any(|f| mechanics::mine::is_mushroom_floor(seed, day, f, version));
        if !bloom {
            return false;
        }
    }
    true
}
