//! Overnight event prediction.
//!
//! The game rolls tomorrow's event at bedtime, so a query for `day` seeds the
//! generator with `day + 1`. The probability tests run in a fixed order off
//! one shared generator; the order itself changed twice between releases and
//! is reproduced per version below.

use serde::Serialize;

use crate::calendar::{season, year};
use crate::rng::GameRandom;
use crate::seeding::seed_for;
use crate::version::GameVersion;

/// Something that can happen to the farm overnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NightEvent {
    None,
    Fairy,
    Witch,
    Meteor,
    /// The strange capsule.
    Ufo,
    /// The stone owl.
    Owl,
    Earthquake,
}

impl NightEvent {
    /// Wire-format names, including the aliases the filter language accepts.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "fairy" => Some(Self::Fairy),
            "witch" => Some(Self::Witch),
            "meteor" => Some(Self::Meteor),
            "ufo" | "capsule" => Some(Self::Ufo),
            "owl" => Some(Self::Owl),
            "earthquake" => Some(Self::Earthquake),
            _ => None,
        }
    }
}

/// The event that occurs in the night after `day`.
pub fn night_event(game_seed: i32, day: i32, version: GameVersion) -> NightEvent {
    let event_day = day + 1;

    // Summer 2 Year 1: the railroad quake fires for every seed.
    if event_day == 30 {
        return NightEvent::Earthquake;
    }

    let month = season(event_day);
    let event_year = year(event_day);

    let seed = seed_for(version.hashes_event_seeds(), event_day, game_seed / 2, 0, 0, 0);
    let mut rng = GameRandom::new(seed);

    if version.hashes_event_seeds() {
        for _ in 0..10 {
            rng.next_double();
        }

        if rng.next_double() < 0.01 && month < 3 {
            return NightEvent::Fairy;
        }
        if rng.next_double() < 0.01 && event_day > 20 {
            return NightEvent::Witch;
        }
        if rng.next_double() < 0.01 && event_day > 5 {
            return NightEvent::Meteor;
        }
        if rng.next_double() < 0.005 {
            return NightEvent::Owl;
        }
        if rng.next_double() < 0.008 && event_year > 1 {
            return NightEvent::Ufo;
        }
        return NightEvent::None;
    }

    if rng.next_double() < 0.01 && month < 3 {
        return NightEvent::Fairy;
    }
    if rng.next_double() < 0.01 {
        return NightEvent::Witch;
    }
    if rng.next_double() < 0.01 {
        return NightEvent::Meteor;
    }

    // The capsule/owl tail is where the releases disagree, in both order and
    // odds. Each draw advances the shared generator, so the order is load-
    // bearing.
    match version {
        GameVersion::V1_3 | GameVersion::V1_4 => {
            if rng.next_double() < 0.01 && event_year > 1 {
                return NightEvent::Ufo;
            }
            if rng.next_double() < 0.01 {
                return NightEvent::Owl;
            }
        }
        GameVersion::V1_5 => {
            if rng.next_double() < 0.008 && event_year > 1 {
                return NightEvent::Ufo;
            }
            if rng.next_double() < 0.008 {
                return NightEvent::Owl;
            }
        }
        // 1.5.3 swapped the order and lowered the owl odds. (1.6 never gets
        // here; it returned on the hashed path above.)
        _ => {
            if rng.next_double() < 0.005 {
                return NightEvent::Owl;
            }
            if rng.next_double() < 0.008 && event_year > 1 {
                return NightEvent::Ufo;
            }
        }
    }

    NightEvent::None
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VERSIONS: [GameVersion; 5] = [
        GameVersion::V1_3,
        GameVersion::V1_4,
        GameVersion::V1_5,
        GameVersion::V1_5_3,
        GameVersion::V1_6,
    ];

    #[test]
    fn day_29_always_quakes() {
        for seed in [1, 100, 12_345, 999_999, -5] {
            for version in ALL_VERSIONS {
                assert_eq!(night_event(seed, 29, version), NightEvent::Earthquake);
            }
        }
    }

    #[test]
    fn fairies_never_visit_in_winter() {
        for seed in 1..2_000 {
            for day in 1..=224 {
                if night_event(seed, day, GameVersion::V1_5) == NightEvent::Fairy {
                    assert_ne!(season(day + 1), 3, "fairy in winter: seed {seed} day {day}");
                }
            }
        }
    }

    #[test]
    fn the_capsule_waits_for_year_two() {
        for seed in 1..2_000 {
            for day in 1..=110 {
                for version in ALL_VERSIONS {
                    assert_ne!(
                        night_event(seed, day, version),
                        NightEvent::Ufo,
                        "capsule in year 1: seed {seed} day {day} {version}"
                    );
                }
            }
        }
    }

    #[test]
    fn owl_order_change_separates_1_5_and_1_5_3() {
        // 1.5 checks the capsule first, 1.5.3 checks the owl first, and the
        // owl odds dropped. Some seed in a small sweep must disagree.
        let disagreement = (1..50_000).any(|seed| {
            (113..200).any(|day| {
                night_event(seed, day, GameVersion::V1_5)
                    != night_event(seed, day, GameVersion::V1_5_3)
            })
        });
        assert!(disagreement, "1.5 and 1.5.3 night tails never diverged");
    }

    #[test]
    fn hashed_seeding_separates_1_5_and_1_6() {
        let disagreement = (1..10_000).any(|seed| {
            (31..120).any(|day| {
                night_event(seed, day, GameVersion::V1_5)
                    != night_event(seed, day, GameVersion::V1_6)
            })
        });
        assert!(disagreement, "1.5 and 1.6 night events never diverged");
    }

    #[test]
    fn predictions_are_deterministic() {
        for version in ALL_VERSIONS {
            assert_eq!(
                night_event(777_777, 55, version),
                night_event(777_777, 55, version)
            );
        }
    }
}
