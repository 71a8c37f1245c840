//! Randomized property sweeps over the whole (seed, day, version) space.

use proptest::{
    arbitrary::any,
    strategy::Strategy,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use seedseer_core::rng::{GameRandom, GameRandomLite, LITE_DRAW_LIMIT};
use seedseer_core::{mechanics, predict_day, GameVersion, NightEvent};

const VERSIONS: [GameVersion; 5] = [
    GameVersion::V1_3,
    GameVersion::V1_4,
    GameVersion::V1_5,
    GameVersion::V1_5_3,
    GameVersion::V1_6,
];

fn version_strategy() -> impl Strategy<Value = GameVersion> {
    (0usize..VERSIONS.len()).prop_map(|i| VERSIONS[i])
}

#[test]
fn sampled_draws_always_land_in_the_unit_interval() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(512));
    runner
        .run(&any::<i32>(), |seed| {
            let mut rng = GameRandom::new(seed);
            for _ in 0..64 {
                let v = rng.sample();
                if !(0.0..1.0).contains(&v) {
                    return Err(TestCaseError::fail(format!("seed {seed} produced {v}")));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn lite_generator_never_diverges_from_full() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(2_048));
    runner
        .run(&any::<i32>(), |seed| {
            let mut full = GameRandom::new(seed);
            let mut lite = GameRandomLite::new(seed);
            for call in 0..LITE_DRAW_LIMIT {
                let f = full.sample();
                let l = lite.sample();
                if f != l {
                    return Err(TestCaseError::fail(format!(
                        "seed {seed} call {call}: {l} != {f}"
                    )));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn luck_band_and_dish_range_hold_everywhere() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(512));
    runner
        .run(&(any::<i32>(), 1i32..=448), |(seed, day)| {
            let luck = mechanics::daily_luck(seed, day);
            if !(-0.1..=0.1).contains(&luck) {
                return Err(TestCaseError::fail(format!("luck {luck} seed {seed} day {day}")));
            }
            let dish = mechanics::dish_of_day(seed, day);
            if !(194..240).contains(&dish.id) || !(1..=13).contains(&dish.quantity) {
                return Err(TestCaseError::fail(format!(
                    "dish {dish:?} seed {seed} day {day}"
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn predictions_hold_their_shape_for_arbitrary_inputs() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(256));
    runner
        .run(&(any::<i32>(), 1i32..=448, version_strategy()), |(seed, day, version)| {
            let prediction = predict_day(seed, day, version);

            if prediction.cart.is_some() != seedseer_core::calendar::is_cart_day(day) {
                return Err(TestCaseError::fail(format!(
                    "cart presence mismatch: seed {seed} day {day}"
                )));
            }
            if let Some(cart) = &prediction.cart {
                if cart.len() != 10 {
                    return Err(TestCaseError::fail(format!("cart size {}", cart.len())));
                }
                for item in cart {
                    if item.quantity != 1 && item.quantity != 5 {
                        return Err(TestCaseError::fail(format!("quantity {}", item.quantity)));
                    }
                }
            }
            if day == 29 && prediction.night_event != NightEvent::Earthquake {
                return Err(TestCaseError::fail(format!(
                    "day 29 skipped the quake: seed {seed} {version}"
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn infestation_gate_holds_for_arbitrary_floors() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(512));
    runner
        .run(
            &(any::<i32>(), 1i32..=448, 1i32..=240, version_strategy()),
            |(seed, day, level, version)| {
                let section = level % 40;
                let infestable = (6..=29).contains(&section) && section != 19;
                if !infestable && mechanics::mine::is_infested_floor(seed, day, level, version) {
                    return Err(TestCaseError::fail(format!(
                        "gated floor {level} infested: seed {seed} day {day} {version}"
                    )));
                }
                Ok(())
            },
        )
        .unwrap();
}
