//! Daily luck and the saloon dish of the day.
//!
//! Both come off the same generator: the game picks the dish first and rolls
//! luck afterwards, so the luck procedure replays the dish prefix draw for
//! draw before it reads its own roll.

use serde::Serialize;

use crate::calendar::day_of_month;
use crate::rng::GameRandom;

/// What the saloon serves, and how many can be bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DishOfDay {
    pub id: i32,
    pub quantity: i32,
}

/// Item ids the dish roll rejects and redraws.
const REJECTED_DISHES: [i32; 7] = [346, 196, 216, 224, 206, 395, 217];

/// The shared generator for dish, luck, and weather on a given day.
pub(crate) fn daily_rng(game_seed: i32, day: i32) -> GameRandom {
    let seed = (game_seed / 100).wrapping_add((day - 1).wrapping_mul(10)).wrapping_add(1);
    GameRandom::new(seed)
}

/// Draws the dish prefix off `rng`, leaving the generator positioned where
/// the luck roll happens.
fn dish_prefix(rng: &mut GameRandom, day: i32) -> DishOfDay {
    // The generator is seeded before the day counter advances, so the warmup
    // length comes from the previous day's position in the month.
    let warmup = if day > 1 { day_of_month(day - 1) } else { 0 };
    for _ in 0..warmup {
        rng.next_double();
    }

    let mut id = rng.next_in(194, 240);
    while REJECTED_DISHES.contains(&id) {
        id = rng.next_in(194, 240);
    }

    let bonus = if rng.next_double() < 0.08 { 10 } else { 0 };
    let quantity = rng.next_in(1, 4 + bonus);

    // Item construction costs one more draw.
    rng.next_double();

    DishOfDay { id, quantity }
}

/// The saloon's dish for a given seed and day.
pub fn dish_of_day(game_seed: i32, day: i32) -> DishOfDay {
    dish_prefix(&mut daily_rng(game_seed, day), day)
}

/// Daily luck in `[-0.1, 0.1]`.
pub fn daily_luck(game_seed: i32, day: i32) -> f64 {
    let mut rng = daily_rng(game_seed, day);
    dish_prefix(&mut rng, day);

    let roll = rng.next_in(-100, 101);
    (f64::from(roll) / 1000.0).min(0.1)
}
