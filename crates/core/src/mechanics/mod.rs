//! Per-phenomenon prediction procedures.
//!
//! Every function here builds a fresh RNG from a derived seed and consumes it
//! in exactly the order and quantity the game does, including draws whose
//! results are thrown away. Reordering or eliding a draw silently shifts
//! every later prediction for the same seed, so the draw sequences in these
//! modules are contract, not implementation detail.

pub mod cart;
pub mod geode;
pub mod luck;
pub mod mine;
pub mod night;
pub mod weather;

pub use cart::{cart_for_day, cart_has_item, find_item_in_cart, CartItem};
pub use geode::{geode_item, geode_sequence, GeodeResult, GeodeType};
pub use luck::{daily_luck, dish_of_day, DishOfDay};
pub use mine::{
    find_dark_floors, find_monster_floors, find_mushroom_floors, floor_conditions, remixed_chest,
    ChestItem, ChestKind, FloorConditions,
};
pub use night::{night_event, NightEvent};
pub use weather::{weather_tomorrow, Weather};
