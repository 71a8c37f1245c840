//! Compiled-in item catalogs.
//!
//! Three generations of cart data plus the geode drop tables. All of it is
//! read-only and ordered: the 1.6 catalog's iteration order is observable
//! through the shuffle-key draw sequence, so it is kept as a plain slice,
//! never re-keyed into a map.

mod cart;
mod geode;
mod objects;

pub use cart::{CART_ITEMS_1_4, CART_ROLL_TO_ID_PRE14};
pub use geode::{FROZEN_MINERALS, GEODE_MINERALS, MAGMA_MINERALS, OMNI_MINERALS, TROVE_ITEMS};
pub use objects::OBJECTS_1_6;

/// One row of the 1.6 object catalog.
///
/// `type_excluded` folds the catalog's type string down to the single bit the
/// cart cares about: whether the type is one of Arch, Minerals, or Quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectEntry {
    pub id: i32,
    pub price: i32,
    pub offlimits: bool,
    pub category: i32,
    pub type_excluded: bool,
}

/// Ids the cart mechanics index by roll value, 0..=789.
pub const ID_SPACE: usize = 790;

/// Base price by item id, for the `max(roll·100, roll·base_price)` pricing
/// formula. Ids without a catalog row price as 0.
pub static PRICE_BY_ID: [i32; ID_SPACE] = build_price_index();

/// Membership table for the 1.4–1.5 legal cart set.
pub static CART_LEGAL_1_4: [bool; ID_SPACE] = build_cart_legality();

const fn build_price_index() -> [i32; ID_SPACE] {
    let mut prices = [0i32; ID_SPACE];
    let mut at = 0;
    while at < OBJECTS_1_6.len() {
        let entry = OBJECTS_1_6[at];
        if entry.id >= 0 && (entry.id as usize) < ID_SPACE {
            prices[entry.id as usize] = entry.price;
        }
        at += 1;
    }
    prices
}

const fn build_cart_legality() -> [bool; ID_SPACE] {
    let mut legal = [false; ID_SPACE];
    let mut at = 0;
    while at < CART_ITEMS_1_4.len() {
        legal[CART_ITEMS_1_4[at] as usize] = true;
        at += 1;
    }
    legal
}

/// Base price lookup used by every cart pricing path.
#[inline]
pub fn base_price(item_id: i32) -> i32 {
    if item_id >= 0 && (item_id as usize) < ID_SPACE {
        PRICE_BY_ID[item_id as usize]
    } else {
        0
    }
}

/// Whether an id may be sold by the 1.4–1.5 cart.
#[inline]
pub fn is_cart_legal_1_4(item_id: i32) -> bool {
    item_id >= 0 && (item_id as usize) < ID_SPACE && CART_LEGAL_1_4[item_id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_table_covers_every_roll() {
        assert_eq!(CART_ROLL_TO_ID_PRE14.len(), 788);
    }

    #[test]
    fn roll_table_ids_fit_the_id_space() {
        for &id in CART_ROLL_TO_ID_PRE14 {
            assert!((2..ID_SPACE as i32).contains(&id), "roll table id {id} out of range");
        }
    }

    #[test]
    fn legal_cart_items_have_catalog_prices() {
        for &id in CART_ITEMS_1_4 {
            assert!(base_price(id) > 0, "cart-legal item {id} has no base price");
        }
    }

    #[test]
    fn catalog_is_ordered_and_duplicate_free() {
        for pair in OBJECTS_1_6.windows(2) {
            assert!(pair[0].id < pair[1].id, "catalog out of order at id {}", pair[1].id);
        }
    }

    #[test]
    fn catalog_has_enough_cart_candidates() {
        let candidates = OBJECTS_1_6
            .iter()
            .filter(|e| {
                e.price > 0
                    && !e.offlimits
                    && (2..790).contains(&e.id)
                    && e.category < 0
                    && e.category != -999
                    && !e.type_excluded
            })
            .count();
        assert!(candidates >= 10, "only {candidates} sellable catalog entries");
    }

    #[test]
    fn excluded_types_never_appear_in_the_legal_cart_set() {
        for entry in OBJECTS_1_6 {
            if entry.type_excluded {
                assert!(
                    !is_cart_legal_1_4(entry.id),
                    "excluded-type item {} is marked cart-legal",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn mineral_tables_only_hold_catalog_minerals() {
        for &id in GEODE_MINERALS.iter().chain(FROZEN_MINERALS).chain(MAGMA_MINERALS) {
            assert!(OMNI_MINERALS.contains(&id), "mineral {id} missing from the omni table");
        }
    }
}
