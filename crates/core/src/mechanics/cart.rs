//! Traveling cart stock prediction.
//!
//! Three selection algorithms shipped over the game's lifetime:
//!
//! - pre-1.4: ten raw rolls resolved through a lookup table, repeats legal;
//! - 1.4/1.5: ten rolls advanced item-by-item to the next legal id, with
//!   duplicate slots rejected (the rejected candidate's price draws still
//!   happen, which is why the scan below prices every candidate it tests);
//! - 1.6: one shuffle key drawn per catalog row (rejected rows included),
//!   survivors sorted by key, category-filtered, first ten taken.
//!
//! On a 1.6 shuffle-key collision the later row silently replaces the
//! earlier one. That mirrors the game's dictionary insert and is kept as-is;
//! a `BTreeMap` gives the same later-wins insert plus ascending-key walk.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calendar::is_cart_day;
use crate::rng::GameRandom;
use crate::seeding::hash_seed;
use crate::tables::{base_price, is_cart_legal_1_4, ObjectEntry, CART_ROLL_TO_ID_PRE14, OBJECTS_1_6};
use crate::version::GameVersion;

/// One cart slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub id: i32,
    pub price: i32,
    pub quantity: i32,
}

const CART_SLOTS: usize = 10;

/// Price and quantity draws shared by every selection algorithm. The three
/// draws always happen, in this order, even when the caller only wants one of
/// the values.
#[inline]
fn price_and_quantity(rng: &mut GameRandom, item_id: i32) -> (i32, i32) {
    let rolled = rng.next_in(1, 11) * 100;
    let scaled = rng.next_in(3, 6) * base_price(item_id);
    let quantity = if rng.next_double() < 0.1 { 5 } else { 1 };
    (rolled.max(scaled), quantity)
}

fn stock_pre14(game_seed: i32, day: i32) -> Vec<CartItem> {
    let mut rng = GameRandom::new(game_seed.wrapping_add(day));
    let mut stock = Vec::with_capacity(CART_SLOTS);

    for _ in 0..CART_SLOTS {
        let roll = rng.next_in(2, 790);
        let id = CART_ROLL_TO_ID_PRE14[(roll - 2) as usize];
        let (price, quantity) = price_and_quantity(&mut rng, id);
        stock.push(CartItem { id, price, quantity });
    }

    stock
}

fn stock_1_4(game_seed: i32, day: i32) -> Vec<CartItem> {
    let mut rng = GameRandom::new(game_seed.wrapping_add(day));
    let mut stock: Vec<CartItem> = Vec::with_capacity(CART_SLOTS);

    for _ in 0..CART_SLOTS {
        let mut candidate = rng.next_in(2, 790);
        loop {
            candidate = (candidate + 1) % 790;
            if !is_cart_legal_1_4(candidate) {
                continue;
            }
            let (price, quantity) = price_and_quantity(&mut rng, candidate);
            if stock.iter().all(|item| item.id != candidate) {
                stock.push(CartItem { id: candidate, price, quantity });
                break;
            }
            // Duplicate: the draws above are already spent, keep scanning.
        }
    }

    stock
}

/// Runs the 1.6 catalog shuffle and returns the ten selected entries along
/// with the generator, positioned for the per-slot price draws.
fn selection_1_6(game_seed: i32, day: i32) -> (GameRandom, Vec<&'static ObjectEntry>) {
    let mut rng = GameRandom::new(hash_seed(day, game_seed / 2, 0, 0, 0));

    // Key every catalog row before filtering anything: the game draws first
    // and rejects after, so rejected rows still advance the generator.
    let mut keyed: BTreeMap<i32, &ObjectEntry> = BTreeMap::new();
    for entry in OBJECTS_1_6 {
        let key = rng.next();
        if entry.price == 0 || entry.offlimits || !(2..790).contains(&entry.id) {
            continue;
        }
        keyed.insert(key, entry);
    }

    let mut selected = Vec::with_capacity(CART_SLOTS);
    for entry in keyed.values() {
        if entry.category >= 0 || entry.category == -999 || entry.type_excluded {
            continue;
        }
        selected.push(*entry);
        if selected.len() == CART_SLOTS {
            break;
        }
    }

    (rng, selected)
}

fn stock_1_6(game_seed: i32, day: i32) -> Vec<CartItem> {
    let (mut rng, selected) = selection_1_6(game_seed, day);
    selected
        .into_iter()
        .map(|entry| {
            let (price, quantity) = price_and_quantity(&mut rng, entry.id);
            CartItem { id: entry.id, price, quantity }
        })
        .collect()
}

/// The ten cart slots for a given day. The caller is responsible for asking
/// only on cart days; the stock is derived for any day.
pub fn cart_for_day(game_seed: i32, day: i32, version: GameVersion) -> Vec<CartItem> {
    match version {
        GameVersion::V1_3 => stock_pre14(game_seed, day),
        GameVersion::V1_4 | GameVersion::V1_5 | GameVersion::V1_5_3 => stock_1_4(game_seed, day),
        GameVersion::V1_6 => stock_1_6(game_seed, day),
    }
}

/// Allocation-light membership test used by the search kernel's hot loop.
/// Draw-for-draw equivalent to [`cart_for_day`] followed by a scan, but stops
/// as soon as the target is selected and skips price bookkeeping it does not
/// need.
pub fn cart_has_item(
    game_seed: i32,
    day: i32,
    target: i32,
    max_price: Option<i32>,
    version: GameVersion,
) -> bool {
    match version {
        GameVersion::V1_3 => {
            let mut rng = GameRandom::new(game_seed.wrapping_add(day));
            for _ in 0..CART_SLOTS {
                let roll = rng.next_in(2, 790);
                let id = CART_ROLL_TO_ID_PRE14[(roll - 2) as usize];
                let (price, _) = price_and_quantity(&mut rng, id);
                if id == target && max_price.map_or(true, |cap| price <= cap) {
                    return true;
                }
            }
            false
        }
        GameVersion::V1_4 | GameVersion::V1_5 | GameVersion::V1_5_3 => {
            let mut rng = GameRandom::new(game_seed.wrapping_add(day));
            let mut seen = [0i32; CART_SLOTS];
            for slot in 0..CART_SLOTS {
                let mut candidate = rng.next_in(2, 790);
                loop {
                    candidate = (candidate + 1) % 790;
                    if !is_cart_legal_1_4(candidate) {
                        continue;
                    }
                    let (price, _) = price_and_quantity(&mut rng, candidate);
                    if seen[..slot].contains(&candidate) {
                        continue;
                    }
                    if candidate == target && max_price.map_or(true, |cap| price <= cap) {
                        return true;
                    }
                    seen[slot] = candidate;
                    break;
                }
            }
            false
        }
        GameVersion::V1_6 => {
            // Membership is decided by the selection alone; price draws only
            // matter when a cap applies, and then only up to the target's
            // slot, because every call starts a fresh generator.
            let (mut rng, selected) = selection_1_6(game_seed, day);
            let Some(slot) = selected.iter().position(|entry| entry.id == target) else {
                return false;
            };
            match max_price {
                None => true,
                Some(cap) => {
                    let mut price = 0;
                    for entry in &selected[..=slot] {
                        price = price_and_quantity(&mut rng, entry.id).0;
                    }
                    price <= cap
                }
            }
        }
    }
}

/// First cart day within `max_days` whose stock includes `target`.
/// Returns the day and the offered price.
pub fn find_item_in_cart(
    game_seed: i32,
    target: i32,
    max_days: i32,
    version: GameVersion,
) -> Option<(i32, i32)> {
    for day in 1..=max_days {
        if !is_cart_day(day) {
            continue;
        }
        if let Some(item) =
            cart_for_day(game_seed, day, version).into_iter().find(|item| item.id == target)
        {
            return Some((day, item.price));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_VERSIONS: [GameVersion; 5] = [
        GameVersion::V1_3,
        GameVersion::V1_4,
        GameVersion::V1_5,
        GameVersion::V1_5_3,
        GameVersion::V1_6,
    ];

    #[test]
    fn every_version_fills_ten_slots() {
        for version in ALL_VERSIONS {
            assert_eq!(cart_for_day(12_345, 5, version).len(), 10, "{version}");
        }
    }

    #[test]
    fn slots_are_distinct_from_1_4_on() {
        for version in [GameVersion::V1_4, GameVersion::V1_5, GameVersion::V1_5_3] {
            for seed in [1, 12_345, 777_777, -3] {
                let stock = cart_for_day(seed, 7, version);
                let ids: HashSet<i32> = stock.iter().map(|item| item.id).collect();
                assert_eq!(ids.len(), 10, "duplicate slot: seed {seed} {version}");
            }
        }
    }

    #[test]
    fn slots_are_distinct_and_filtered_under_1_6() {
        for seed in [1, 12_345, 777_777] {
            let stock = cart_for_day(seed, 5, GameVersion::V1_6);
            let mut ids = HashSet::new();
            for item in &stock {
                assert!(ids.insert(item.id), "duplicate slot {}", item.id);
                let entry = OBJECTS_1_6.iter().find(|e| e.id == item.id).unwrap();
                assert!(entry.category < 0 && entry.category != -999);
                assert!(!entry.type_excluded);
                assert!(!entry.offlimits);
                assert!(entry.price > 0);
            }
        }
    }

    #[test]
    fn quantities_are_one_or_five() {
        for version in ALL_VERSIONS {
            for seed in [0, 12_345, -100_000] {
                for item in cart_for_day(seed, 5, version) {
                    assert!(item.quantity == 1 || item.quantity == 5);
                }
            }
        }
    }

    #[test]
    fn prices_respect_the_floor_formula() {
        // max(p1*100, p2*base) with p1 in 1..=10 means nothing sells below
        // 100 and round-number floors dominate cheap items.
        for version in ALL_VERSIONS {
            for item in cart_for_day(424_242, 7, version) {
                assert!(item.price >= 100, "price {} below floor", item.price);
            }
        }
    }

    #[test]
    fn legal_set_is_enforced_from_1_4_on() {
        for seed in [9, 12_345] {
            for item in cart_for_day(seed, 5, GameVersion::V1_4) {
                assert!(is_cart_legal_1_4(item.id), "illegal item {}", item.id);
            }
        }
    }

    #[test]
    fn stock_is_deterministic() {
        for version in ALL_VERSIONS {
            assert_eq!(
                cart_for_day(12_345, 5, version),
                cart_for_day(12_345, 5, version)
            );
        }
    }

    #[test]
    fn has_item_agrees_with_full_stock() {
        for version in ALL_VERSIONS {
            for seed in [1, 12_345, 31_337, -9] {
                let stock = cart_for_day(seed, 5, version);
                for item in &stock {
                    assert!(
                        cart_has_item(seed, 5, item.id, None, version),
                        "false negative: seed {seed} item {} {version}",
                        item.id
                    );
                    assert!(
                        cart_has_item(seed, 5, item.id, Some(item.price), version),
                        "price-capped false negative: seed {seed} item {} {version}",
                        item.id
                    );
                }
                let absent: Vec<i32> = [16, 78, 266, 417, 724]
                    .into_iter()
                    .filter(|id| stock.iter().all(|item| item.id != *id))
                    .collect();
                for id in absent {
                    assert!(
                        !cart_has_item(seed, 5, id, None, version),
                        "false positive: seed {seed} item {id} {version}"
                    );
                }
            }
        }
    }

    #[test]
    fn price_cap_filters_expensive_offers() {
        let stock = cart_for_day(12_345, 5, GameVersion::V1_5);
        for item in &stock {
            assert!(!cart_has_item(
                12_345,
                5,
                item.id,
                Some(item.price - 1),
                GameVersion::V1_5
            ));
        }
    }

    #[test]
    fn find_item_scans_only_cart_days() {
        if let Some((day, _price)) = find_item_in_cart(12_345, 266, 224, GameVersion::V1_5) {
            assert!(is_cart_day(day));
        }
    }

    #[test]
    fn wrapping_seed_handles_extreme_game_ids() {
        assert_eq!(cart_for_day(i32::MAX, 5, GameVersion::V1_5).len(), 10);
        assert_eq!(cart_for_day(i32::MIN, 7, GameVersion::V1_6).len(), 10);
    }
}
