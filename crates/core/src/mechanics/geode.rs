//! Geode cracking prediction.
//!
//! The blacksmith's counter runs one generator per geode, seeded from the
//! running crack count. 1.4 added two variable-length warmup runs, 1.5 added
//! a probe draw, and 1.6 flipped the mineral-vs-ore comparison. The flip
//! looks like a bug from the outside; it ships in the game, so it ships
//! here too.

use serde::Serialize;

use crate::rng::GameRandom;
use crate::seeding::seed_for;
use crate::tables::{
    FROZEN_MINERALS, GEODE_MINERALS, MAGMA_MINERALS, OMNI_MINERALS, TROVE_ITEMS,
};
use crate::version::GameVersion;

/// Everything the blacksmith can break open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeodeType {
    Geode,
    FrozenGeode,
    MagmaGeode,
    OmniGeode,
    ArtifactTrove,
    GoldenCoconut,
}

impl GeodeType {
    /// Wire-format names, including the short aliases the filter language and
    /// CLI accept.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "geode" | "regular" => Some(Self::Geode),
            "frozen" | "frozen_geode" => Some(Self::FrozenGeode),
            "magma" | "magma_geode" => Some(Self::MagmaGeode),
            "omni" | "omni_geode" => Some(Self::OmniGeode),
            "trove" | "artifact_trove" => Some(Self::ArtifactTrove),
            "coconut" | "golden_coconut" => Some(Self::GoldenCoconut),
            _ => None,
        }
    }
}

/// What fell out, and how many.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GeodeResult {
    pub item_id: i32,
    pub quantity: i32,
}

/// Predict the contents of crack number `n` (1-based).
///
/// `deepest_mine_level` gates the ore upgrade tiers; the public API passes
/// the bottom of the mines. Hashed seeding mixes in the cracking player's id
/// (the host, id 0, everywhere in this crate); additive seeding predates
/// multiplayer and ignores it.
pub fn geode_item(
    game_seed: i32,
    player_id: i32,
    n: i32,
    geode_type: GeodeType,
    deepest_mine_level: i32,
    version: GameVersion,
) -> GeodeResult {
    let use_hash = version.hashes_event_seeds();
    let player_part = if use_hash { player_id / 2 } else { 0 };
    let seed = seed_for(use_hash, n, game_seed / 2, player_part, 0, 0);
    let mut rng = GameRandom::new(seed);

    if version.has_geode_warmup() {
        for _ in 0..rng.next_in(1, 10) {
            rng.next_double();
        }
        for _ in 0..rng.next_in(1, 10) {
            rng.next_double();
        }
    }
    if version.has_qi_bean_probe() {
        rng.next_double();
    }

    if geode_type == GeodeType::GoldenCoconut {
        return coconut_result(&mut rng);
    }
    if geode_type == GeodeType::ArtifactTrove {
        let item_id = TROVE_ITEMS[rng.next_in(0, TROVE_ITEMS.len() as i32) as usize];
        return GeodeResult { item_id, quantity: 1 };
    }

    let roll = rng.next_double();
    let mineral =
        if version.has_reversed_geode_check() { roll < 0.5 } else { roll >= 0.5 };

    if !mineral {
        let stack = resource_stack(&mut rng);
        if rng.next_double() < 0.5 {
            return match rng.next_in(0, 4) {
                0 | 1 => GeodeResult { item_id: 390, quantity: stack }, // stone
                2 => GeodeResult { item_id: 330, quantity: 1 },        // clay
                _ => {
                    let crystal = match geode_type {
                        GeodeType::Geode => 86,
                        GeodeType::FrozenGeode => 84,
                        GeodeType::MagmaGeode => 82,
                        GeodeType::OmniGeode => 82 + rng.next_in(0, 3) * 2,
                        _ => 86,
                    };
                    GeodeResult { item_id: crystal, quantity: 1 }
                }
            };
        }
        return ore_result(&mut rng, geode_type, deepest_mine_level, stack);
    }

    let pool = match geode_type {
        GeodeType::Geode => GEODE_MINERALS,
        GeodeType::FrozenGeode => FROZEN_MINERALS,
        GeodeType::MagmaGeode => MAGMA_MINERALS,
        GeodeType::OmniGeode => OMNI_MINERALS,
        GeodeType::ArtifactTrove | GeodeType::GoldenCoconut => unreachable!("handled above"),
    };

    if version.has_reversed_geode_check() {
        // 1.6 rolls the prismatic chance before picking from the pool.
        if rng.next_double() < 0.008 && n > 15 {
            return GeodeResult { item_id: 74, quantity: 1 };
        }
        let item_id = pool[rng.next_in(0, pool.len() as i32) as usize];
        GeodeResult { item_id, quantity: 1 }
    } else {
        let item_id = pool[rng.next_in(0, pool.len() as i32) as usize];
        if geode_type == GeodeType::OmniGeode && rng.next_double() < 0.008 && n > 15 {
            return GeodeResult { item_id: 74, quantity: 1 };
        }
        GeodeResult { item_id, quantity: 1 }
    }
}

/// Stack size for the resource half of the table: 1/3/5, with long-shot
/// upgrades to 10 and 20.
fn resource_stack(rng: &mut GameRandom) -> i32 {
    let mut stack = rng.next_in(0, 3) * 2 + 1;
    if rng.next_double() < 0.1 {
        stack = 10;
    }
    if rng.next_double() < 0.01 {
        stack = 20;
    }
    stack
}

fn ore_result(
    rng: &mut GameRandom,
    geode_type: GeodeType,
    deepest_mine_level: i32,
    stack: i32,
) -> GeodeResult {
    match geode_type {
        GeodeType::Geode => match rng.next_in(0, 3) {
            0 => GeodeResult { item_id: 378, quantity: stack },
            1 => GeodeResult {
                item_id: if deepest_mine_level > 25 { 380 } else { 378 },
                quantity: stack,
            },
            _ => GeodeResult { item_id: 382, quantity: stack },
        },
        GeodeType::FrozenGeode => match rng.next_in(0, 4) {
            0 => GeodeResult { item_id: 378, quantity: stack },
            1 => GeodeResult { item_id: 380, quantity: stack },
            2 => GeodeResult { item_id: 382, quantity: stack },
            _ => GeodeResult {
                item_id: if deepest_mine_level > 75 { 384 } else { 380 },
                quantity: stack,
            },
        },
        GeodeType::MagmaGeode | GeodeType::OmniGeode => match rng.next_in(0, 5) {
            0 => GeodeResult { item_id: 378, quantity: stack },
            1 => GeodeResult { item_id: 380, quantity: stack },
            2 => GeodeResult { item_id: 382, quantity: stack },
            3 => GeodeResult { item_id: 384, quantity: stack },
            _ => GeodeResult { item_id: 386, quantity: stack / 2 + 1 },
        },
        _ => GeodeResult { item_id: 390, quantity: stack },
    }
}

fn coconut_result(rng: &mut GameRandom) -> GeodeResult {
    // Hat chance rolls first whether or not the hat is still available.
    if rng.next_double() < 0.05 {
        return GeodeResult { item_id: -1, quantity: 1 };
    }
    match rng.next_in(0, 7) {
        0 => GeodeResult { item_id: 69, quantity: 1 },
        1 => GeodeResult { item_id: 835, quantity: 1 },
        2 => GeodeResult { item_id: 833, quantity: 5 },
        3 => GeodeResult { item_id: 831, quantity: 5 },
        4 => GeodeResult { item_id: 820, quantity: 1 },
        5 => GeodeResult { item_id: 292, quantity: 1 },
        _ => GeodeResult { item_id: 386, quantity: 5 },
    }
}

/// Predict `count` consecutive cracks starting at `start` (1-based), as the
/// host player.
pub fn geode_sequence(
    game_seed: i32,
    start: i32,
    count: i32,
    geode_type: GeodeType,
    deepest_mine_level: i32,
    version: GameVersion,
) -> Vec<GeodeResult> {
    (0..count)
        .map(|i| geode_item(game_seed, 0, start + i, geode_type, deepest_mine_level, version))
        .collect()
}
