//! Mine floor attributes: infestations, unusual darkness, mushroom bloom.
//!
//! Each predicate runs off its own freshly seeded generator and draws at most
//! four times, which is what the partial-shuffle [`GameRandomLite`] exists
//! for. Floor-range queries construct one generator per floor.

use serde::Serialize;

use crate::rng::GameRandomLite;
use crate::seeding::seed_for;
use crate::version::GameVersion;

/// All three attributes for one floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FloorConditions {
    pub floor: i32,
    pub is_monster: bool,
    pub is_dark: bool,
    pub is_mushroom: bool,
}

/// Infestation check. Covers both monster and slime infestations; the two
/// split on a second draw but count the same for every query in this crate.
pub fn is_infested_floor(game_seed: i32, day: i32, level: i32, version: GameVersion) -> bool {
    // Only the middle stretch of each 40-floor section can be infested, and
    // floor 19 of a section never is.
    let section = level.rem_euclid(40);
    if !(6..=29).contains(&section) || section == 19 {
        return false;
    }

    let use_hash = version.hashes_mine_seeds();
    let level_part = if use_hash { level.wrapping_mul(100) } else { level };
    let seed = seed_for(use_hash, day, game_seed / 2, level_part, 0, 0);
    let mut rng = GameRandomLite::new(seed);

    if rng.next_double() >= 0.044 {
        return false;
    }
    // Below 0.5 the floor fills with monsters, otherwise with slimes. Either
    // way it is infested; the draw still has to happen.
    let _split = rng.next_double();
    true
}

/// Unusual-darkness check. The seeding never changed between releases.
pub fn is_dark_floor(game_seed: i32, day: i32, level: i32) -> bool {
    if level % 10 == 0 || level.rem_euclid(40) > 30 {
        return false;
    }

    let seed = day
        .wrapping_mul(level)
        .wrapping_add(4i32.wrapping_mul(level))
        .wrapping_add(game_seed / 2);
    let mut rng = GameRandomLite::new(seed);

    if rng.next_double() < 0.3 && level > 2 {
        return true;
    }
    rng.next_double() < 0.15 && level > 5 && level != 120
}

/// Mushroom-bloom check. Only floors past 80 qualify, and an infested floor
/// never blooms.
pub fn is_mushroom_floor(game_seed: i32, day: i32, level: i32, version: GameVersion) -> bool {
    if level % 5 == 0 {
        return false;
    }
    if is_infested_floor(game_seed, day, level, version) {
        return false;
    }

    let seed = if version.hashes_mine_seeds() {
        day.wrapping_mul(level).wrapping_add(4i32.wrapping_mul(level)).wrapping_add(game_seed / 2)
    } else {
        (game_seed / 2).wrapping_add(level).wrapping_add(day)
    };
    let mut rng = GameRandomLite::new(seed);

    // The level loader burns one or two draws on lighting before the bloom
    // roll, depending on the same darkness threshold.
    let first = rng.next_double();
    if first < 0.3 && level > 2 {
        rng.next_double();
    }
    rng.next_double();

    rng.next_double() < 0.035 && level > 80
}

/// All three attributes for one floor.
pub fn floor_conditions(
    game_seed: i32,
    day: i32,
    level: i32,
    version: GameVersion,
) -> FloorConditions {
    FloorConditions {
        floor: level,
        is_monster: is_infested_floor(game_seed, day, level, version),
        is_dark: is_dark_floor(game_seed, day, level),
        is_mushroom: is_mushroom_floor(game_seed, day, level, version),
    }
}

/// Floors in `[lo, hi]` that are infested on `day`.
pub fn find_monster_floors(
    game_seed: i32,
    day: i32,
    lo: i32,
    hi: i32,
    version: GameVersion,
) -> Vec<i32> {
    (lo..=hi).filter(|&level| is_infested_floor(game_seed, day, level, version)).collect()
}

/// Floors in `[lo, hi]` that are unusually dark on `day`.
pub fn find_dark_floors(game_seed: i32, day: i32, lo: i32, hi: i32) -> Vec<i32> {
    (lo..=hi).filter(|&level| is_dark_floor(game_seed, day, level)).collect()
}

/// What a remixed-mines reward chest holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestKind {
    Boots,
    MeleeWeapon,
    Ring,
}

/// One remixed reward chest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChestItem {
    pub kind: ChestKind,
    pub item_id: i32,
}

/// Candidate pools for the remixed reward chests, by floor.
const CHEST_POOLS: &[(i32, &[(ChestKind, i32)])] = &[
    (10, &[
        (ChestKind::Boots, 506),
        (ChestKind::Boots, 507),
        (ChestKind::MeleeWeapon, 12),
        (ChestKind::MeleeWeapon, 17),
        (ChestKind::MeleeWeapon, 22),
        (ChestKind::MeleeWeapon, 31),
    ]),
    (20, &[
        (ChestKind::MeleeWeapon, 11),
        (ChestKind::MeleeWeapon, 24),
        (ChestKind::MeleeWeapon, 20),
        (ChestKind::Ring, 517),
        (ChestKind::Ring, 519),
    ]),
    (50, &[
        (ChestKind::Boots, 509),
        (ChestKind::Boots, 510),
        (ChestKind::Boots, 508),
        (ChestKind::MeleeWeapon, 1),
        (ChestKind::MeleeWeapon, 43),
    ]),
    (60, &[
        (ChestKind::MeleeWeapon, 21),
        (ChestKind::MeleeWeapon, 44),
        (ChestKind::MeleeWeapon, 6),
        (ChestKind::MeleeWeapon, 18),
        (ChestKind::MeleeWeapon, 27),
    ]),
    (80, &[
        (ChestKind::Boots, 512),
        (ChestKind::Boots, 511),
        (ChestKind::MeleeWeapon, 10),
        (ChestKind::MeleeWeapon, 7),
        (ChestKind::MeleeWeapon, 46),
        (ChestKind::MeleeWeapon, 19),
    ]),
    (90, &[
        (ChestKind::MeleeWeapon, 8),
        (ChestKind::MeleeWeapon, 52),
        (ChestKind::MeleeWeapon, 45),
        (ChestKind::MeleeWeapon, 5),
        (ChestKind::MeleeWeapon, 60),
    ]),
    (110, &[
        (ChestKind::Boots, 514),
        (ChestKind::Boots, 878),
        (ChestKind::MeleeWeapon, 50),
        (ChestKind::MeleeWeapon, 28),
    ]),
];

/// The reward inside a remixed-mines chest, or `None` on floors that carry
/// no chest. Chest contents depend only on the seed, not the day.
pub fn remixed_chest(game_seed: i32, level: i32) -> Option<ChestItem> {
    let (_, pool) = CHEST_POOLS.iter().find(|(floor, _)| *floor == level)?;

    let seed = game_seed.wrapping_mul(512).wrapping_add(level);
    let mut rng = GameRandomLite::new(seed);
    let index = rng.next_in(0, pool.len() as i32) as usize;

    let (kind, item_id) = pool[index];
    Some(ChestItem { kind, item_id })
}

/// Floors in `[lo, hi]` that bloom with mushrooms on `day`.
pub fn find_mushroom_floors(
    game_seed: i32,
    day: i32,
    lo: i32,
    hi: i32,
    version: GameVersion,
) -> Vec<i32> {
    (lo..=hi).filter(|&level| is_mushroom_floor(game_seed, day, level, version)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infestation_respects_the_section_gate() {
        for level in 1..=240 {
            let section = level % 40;
            if (6..=29).contains(&section) && section != 19 {
                continue;
            }
            for seed in [1, 12_345, -400] {
                assert!(
                    !is_infested_floor(seed, 5, level, GameVersion::V1_6),
                    "gated floor {level} reported infested"
                );
            }
        }
    }

    #[test]
    fn floor_19_of_each_section_is_safe() {
        for base in [0, 40, 80, 120] {
            for seed in 0..200 {
                assert!(!is_infested_floor(seed, 9, base + 19, GameVersion::V1_5));
            }
        }
    }

    #[test]
    fn some_floor_is_infested_somewhere() {
        let found = (0..2_000).any(|seed| {
            (1..=120).any(|level| is_infested_floor(seed, 5, level, GameVersion::V1_6))
        });
        assert!(found, "no infested floor in 2000 seeds");
    }

    #[test]
    fn every_tenth_floor_is_never_dark() {
        for level in (10..=120).step_by(10) {
            for seed in 0..200 {
                assert!(!is_dark_floor(seed, 5, level));
            }
        }
    }

    #[test]
    fn mushrooms_only_bloom_below_eighty() {
        for level in 1..=80 {
            for seed in 0..200 {
                assert!(!is_mushroom_floor(seed, 5, level, GameVersion::V1_5));
            }
        }
    }

    #[test]
    fn hashed_seeding_separates_1_3_and_1_4_infestations() {
        let diverged = (0..2_000).any(|seed| {
            (6..=29).any(|level| {
                is_infested_floor(seed, 10, level, GameVersion::V1_3)
                    != is_infested_floor(seed, 10, level, GameVersion::V1_4)
            })
        });
        assert!(diverged, "1.3 and 1.4 infestation checks never diverged");
    }

    #[test]
    fn batch_queries_agree_with_single_floor_checks() {
        let seed = 12_345;
        let monsters = find_monster_floors(seed, 5, 1, 120, GameVersion::V1_6);
        for level in 1..=120 {
            assert_eq!(
                monsters.contains(&level),
                is_infested_floor(seed, 5, level, GameVersion::V1_6)
            );
        }
        let conditions = floor_conditions(seed, 5, 86, GameVersion::V1_6);
        assert_eq!(conditions.is_dark, is_dark_floor(seed, 5, 86));
        assert_eq!(conditions.is_mushroom, is_mushroom_floor(seed, 5, 86, GameVersion::V1_6));
    }

    #[test]
    fn chests_exist_only_on_reward_floors() {
        for level in 1..=120 {
            let expected = [10, 20, 50, 60, 80, 90, 110].contains(&level);
            assert_eq!(remixed_chest(12_345, level).is_some(), expected, "floor {level}");
        }
    }

    #[test]
    fn chest_contents_come_from_the_floor_pool() {
        for seed in 0..500 {
            let chest = remixed_chest(seed, 10).expect("floor 10 always has a chest");
            assert!(
                [506, 507, 12, 17, 22, 31].contains(&chest.item_id),
                "seed {seed} pulled {} out of the floor-10 pool",
                chest.item_id
            );
        }
    }

    #[test]
    fn monster_floors_fall_inside_the_infestable_set() {
        for seed in [12_345, 54_321, -1] {
            for level in find_monster_floors(seed, 5, 1, 120, GameVersion::V1_6) {
                let section = level % 40;
                assert!((6..=29).contains(&section) && section != 19, "floor {level}");
            }
        }
    }
}
