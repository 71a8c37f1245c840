//! Deterministic predictor and seed searcher for farming-sim saves.
//!
//! Everything a save will ever do with its daily generator (luck, the saloon
//! dish, weather, night events, the traveling cart, geodes, mine floors) is
//! a pure function of `(seed, day, version)`. This crate reimplements the
//! game's subtractive generator and the per-mechanic draw sequences bit for
//! bit, then builds two public surfaces on top:
//!
//! - the prediction API ([`api`]): per-day and per-range queries;
//! - the search kernel ([`search`]): evaluate a JSON filter over a seed
//!   interval with progress/match callbacks and cooperative cancellation.
//!
//! Nothing here spawns threads, holds locks, or keeps state between calls;
//! hosts parallelize by partitioning seed intervals across independent calls.

pub mod api;
pub mod calendar;
pub mod mechanics;
pub mod rng;
pub mod search;
pub mod seeding;
pub mod tables;
pub mod version;

pub use api::{
    find_dark_floors, find_item_in_cart, find_monster_floors, find_mushroom_floors,
    predict_cart_range, predict_day, predict_dish_range, predict_geodes, predict_luck_range,
    predict_mine_chests, predict_mine_floors, predict_night_events_range, predict_weather_range,
    DayPrediction, QueryError,
};
pub use mechanics::{
    CartItem, DishOfDay, FloorConditions, GeodeResult, GeodeType, NightEvent, Weather,
};
pub use search::{search_range, FilterParseError, SearchSummary};
pub use version::GameVersion;
