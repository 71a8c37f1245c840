//! Range-style prediction queries.
//!
//! Thin, allocation-friendly wrappers over the mechanics: one row per day or
//! floor, serde-serializable so front ends can pass results straight through.
//! Day/floor windows whose start exceeds their end yield empty results; truly
//! nonsensical bounds (a negative crack count) are caller bugs and fail with
//! a structured error.

use std::fmt;

use serde::Serialize;

use crate::calendar::is_cart_day;
use crate::mechanics::{
    cart_for_day, daily_luck, dish_of_day, floor_conditions, geode_sequence, night_event,
    remixed_chest, weather_tomorrow, CartItem, ChestItem, DishOfDay, FloorConditions, GeodeResult,
    GeodeType, NightEvent, Weather,
};
use crate::version::GameVersion;

pub use crate::mechanics::cart::find_item_in_cart;
pub use crate::mechanics::mine::{find_dark_floors, find_monster_floors, find_mushroom_floors};

/// Geode conditions assume a finished elevator; ore tiers max out at the
/// bottom of the mines.
const DEEPEST_MINE_LEVEL: i32 = 120;

/// A query whose bounds can never produce a meaningful answer.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Geode cracks are numbered from 1.
    BadGeodeIndex(i32),
    /// Negative result counts are a caller bug, not an empty result.
    NegativeCount(i32),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadGeodeIndex(n) => write!(f, "geode index {n} is below 1"),
            Self::NegativeCount(n) => write!(f, "count {n} is negative"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Everything predictable about a single day.
#[derive(Clone, Debug, Serialize)]
pub struct DayPrediction {
    pub luck: f64,
    pub dish: DishOfDay,
    pub weather: Weather,
    pub night_event: NightEvent,
    /// Present only on cart days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<Vec<CartItem>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DayLuck {
    pub day: i32,
    pub luck: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DayDish {
    pub day: i32,
    pub dish: DishOfDay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DayWeather {
    pub day: i32,
    pub weather: Weather,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DayNightEvent {
    pub day: i32,
    pub event: NightEvent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayCart {
    pub day: i32,
    pub items: Vec<CartItem>,
}

/// Predict all daily mechanics for one `(seed, day)`.
pub fn predict_day(seed: i32, day: i32, version: GameVersion) -> DayPrediction {
    DayPrediction {
        luck: daily_luck(seed, day),
        dish: dish_of_day(seed, day),
        weather: weather_tomorrow(seed, day, version),
        night_event: night_event(seed, day, version),
        cart: is_cart_day(day).then(|| cart_for_day(seed, day, version)),
    }
}

/// Daily luck for every day in `[day_lo, day_hi]`.
pub fn predict_luck_range(seed: i32, day_lo: i32, day_hi: i32) -> Vec<DayLuck> {
    (day_lo..=day_hi).map(|day| DayLuck { day, luck: daily_luck(seed, day) }).collect()
}

/// Dish of the day for every day in `[day_lo, day_hi]`.
pub fn predict_dish_range(seed: i32, day_lo: i32, day_hi: i32) -> Vec<DayDish> {
    (day_lo..=day_hi).map(|day| DayDish { day, dish: dish_of_day(seed, day) }).collect()
}

/// Tomorrow's weather for every day in `[day_lo, day_hi]`.
pub fn predict_weather_range(
    seed: i32,
    day_lo: i32,
    day_hi: i32,
    version: GameVersion,
) -> Vec<DayWeather> {
    (day_lo..=day_hi)
        .map(|day| DayWeather { day, weather: weather_tomorrow(seed, day, version) })
        .collect()
}

/// Night events for every day in `[day_lo, day_hi]`, quiet nights included.
pub fn predict_night_events_range(
    seed: i32,
    day_lo: i32,
    day_hi: i32,
    version: GameVersion,
) -> Vec<DayNightEvent> {
    (day_lo..=day_hi)
        .map(|day| DayNightEvent { day, event: night_event(seed, day, version) })
        .collect()
}

/// Cart stock for every cart day in `[day_lo, day_hi]`. Non-cart days are
/// absent from the result rather than empty.
pub fn predict_cart_range(
    seed: i32,
    day_lo: i32,
    day_hi: i32,
    version: GameVersion,
) -> Vec<DayCart> {
    (day_lo..=day_hi)
        .filter(|&day| is_cart_day(day))
        .map(|day| DayCart { day, items: cart_for_day(seed, day, version) })
        .collect()
}

/// Contents of `count` consecutive geodes starting at crack `start`.
pub fn predict_geodes(
    seed: i32,
    start: i32,
    count: i32,
    geode_type: GeodeType,
    version: GameVersion,
) -> Result<Vec<GeodeResult>, QueryError> {
    if start < 1 {
        return Err(QueryError::BadGeodeIndex(start));
    }
    if count < 0 {
        return Err(QueryError::NegativeCount(count));
    }
    Ok(geode_sequence(seed, start, count, geode_type, DEEPEST_MINE_LEVEL, version))
}

/// Full attribute records for every floor in `[floor_lo, floor_hi]`.
pub fn predict_mine_floors(
    seed: i32,
    day: i32,
    floor_lo: i32,
    floor_hi: i32,
    version: GameVersion,
) -> Vec<FloorConditions> {
    (floor_lo..=floor_hi).map(|floor| floor_conditions(seed, day, floor, version)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FloorChest {
    pub floor: i32,
    pub chest: ChestItem,
}

/// Remixed reward chests on floors in `[floor_lo, floor_hi]`. Floors without
/// a chest are absent from the result.
pub fn predict_mine_chests(seed: i32, floor_lo: i32, floor_hi: i32) -> Vec<FloorChest> {
    (floor_lo..=floor_hi)
        .filter_map(|floor| remixed_chest(seed, floor).map(|chest| FloorChest { floor, chest }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_appears_only_on_cart_days() {
        assert!(predict_day(12_345, 1, GameVersion::V1_6).cart.is_none());
        assert!(predict_day(12_345, 5, GameVersion::V1_6).cart.is_some());
        assert!(predict_day(12_345, 7, GameVersion::V1_6).cart.is_some());
        assert!(predict_day(12_345, 6, GameVersion::V1_6).cart.is_none());
    }

    #[test]
    fn ranges_are_inclusive_and_ordered() {
        let luck = predict_luck_range(9, 3, 7);
        assert_eq!(luck.len(), 5);
        assert_eq!(luck.first().map(|row| row.day), Some(3));
        assert_eq!(luck.last().map(|row| row.day), Some(7));
    }

    #[test]
    fn inverted_ranges_come_back_empty() {
        assert!(predict_luck_range(9, 7, 3).is_empty());
        assert!(predict_cart_range(9, 10, 5, GameVersion::V1_6).is_empty());
        assert!(predict_mine_floors(9, 5, 60, 40, GameVersion::V1_6).is_empty());
    }

    #[test]
    fn cart_range_over_one_week_hits_friday_and_sunday() {
        let carts = predict_cart_range(12_345, 5, 7, GameVersion::V1_6);
        assert_eq!(carts.len(), 2);
        assert_eq!(carts[0].day, 5);
        assert_eq!(carts[1].day, 7);
        for cart in &carts {
            assert_eq!(cart.items.len(), 10);
        }
    }

    #[test]
    fn geode_bounds_are_enforced() {
        assert_eq!(
            predict_geodes(1, 0, 5, GeodeType::OmniGeode, GameVersion::V1_6),
            Err(QueryError::BadGeodeIndex(0))
        );
        assert_eq!(
            predict_geodes(1, 1, -1, GeodeType::OmniGeode, GameVersion::V1_6),
            Err(QueryError::NegativeCount(-1))
        );
        let ok = predict_geodes(1, 1, 0, GeodeType::OmniGeode, GameVersion::V1_6)
            .expect("zero-count query is a valid empty request");
        assert!(ok.is_empty());
    }

    #[test]
    fn version_flips_geode_sequences() {
        let v15 = predict_geodes(12_345, 1, 25, GeodeType::OmniGeode, GameVersion::V1_5)
            .expect("bounds are valid");
        let v16 = predict_geodes(12_345, 1, 25, GeodeType::OmniGeode, GameVersion::V1_6)
            .expect("bounds are valid");
        assert_ne!(v15, v16);
    }

    #[test]
    fn predictions_serialize_to_the_wire_shape() {
        let prediction = predict_day(12_345, 5, GameVersion::V1_6);
        let json = serde_json::to_value(&prediction).expect("serializable");
        assert!(json.get("luck").is_some());
        assert!(json.get("dish").and_then(|d| d.get("id")).is_some());
        assert!(json.get("cart").is_some());

        let quiet = predict_day(12_345, 1, GameVersion::V1_6);
        let json = serde_json::to_value(&quiet).expect("serializable");
        assert!(json.get("cart").is_none(), "absent cart must not serialize");
    }
}
