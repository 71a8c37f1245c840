//! `seedseer`: predictions and seed searches from the command line.
//!
//! Prediction subcommands print one JSON document to stdout. `search` is the
//! host side of the kernel's concurrency story: it splits the seed interval
//! into disjoint per-worker sub-ranges, runs one independent search per
//! thread, and coordinates the global match cap with atomics. The kernel
//! itself stays single-threaded.

use std::fs;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use seedseer_core::{
    calendar, find_dark_floors, find_item_in_cart, find_monster_floors, find_mushroom_floors,
    predict_cart_range, predict_day, predict_dish_range, predict_geodes, predict_luck_range,
    predict_mine_chests, predict_mine_floors, predict_night_events_range, predict_weather_range,
    search_range, GameVersion, GeodeType,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game version the predictions should mimic
    #[arg(long, default_value = "1.6", global = true)]
    game_version: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All daily mechanics for one seed and day
    Day { seed: i32, day: i32 },
    /// Daily luck over a day range
    Luck { seed: i32, day_lo: i32, day_hi: i32 },
    /// Saloon dish over a day range
    Dish { seed: i32, day_lo: i32, day_hi: i32 },
    /// Tomorrow's weather over a day range
    Weather { seed: i32, day_lo: i32, day_hi: i32 },
    /// Night events over a day range
    Nights { seed: i32, day_lo: i32, day_hi: i32 },
    /// Traveling cart stock over a day range
    Cart { seed: i32, day_lo: i32, day_hi: i32 },
    /// Consecutive geode contents
    Geodes {
        seed: i32,
        start: i32,
        count: i32,
        /// geode, frozen, magma, omni, trove, or coconut
        #[arg(long, default_value = "omni")]
        kind: String,
    },
    /// Mine floor attributes for one day
    Mine {
        seed: i32,
        day: i32,
        floor_lo: i32,
        floor_hi: i32,
        /// Print only floors flagged by one predicate: monster, dark, mushroom
        #[arg(long)]
        only: Option<String>,
    },
    /// Remixed reward chest contents
    Chests { seed: i32, floor_lo: i32, floor_hi: i32 },
    /// First cart day offering an item
    FindItem {
        seed: i32,
        item_id: i32,
        #[arg(long, default_value_t = 224)]
        max_days: i32,
    },
    /// Seeds in a range matching a JSON filter
    Search {
        /// Inline filter JSON, or @path to read it from a file
        filter: String,
        seed_lo: i32,
        seed_hi: i32,
        #[arg(long, default_value_t = 100)]
        max_results: u32,
        #[arg(long, default_value_t = 1)]
        workers: u32,
    },
    /// Calendar facts for a day
    DayInfo { day: i32 },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let version = GameVersion::parse(&args.game_version);

    match args.command {
        Command::Day { seed, day } => emit(&predict_day(seed, day, version))?,
        Command::Luck { seed, day_lo, day_hi } => emit(&predict_luck_range(seed, day_lo, day_hi))?,
        Command::Dish { seed, day_lo, day_hi } => emit(&predict_dish_range(seed, day_lo, day_hi))?,
        Command::Weather { seed, day_lo, day_hi } => {
            emit(&predict_weather_range(seed, day_lo, day_hi, version))?
        }
        Command::Nights { seed, day_lo, day_hi } => {
            emit(&predict_night_events_range(seed, day_lo, day_hi, version))?
        }
        Command::Cart { seed, day_lo, day_hi } => {
            emit(&predict_cart_range(seed, day_lo, day_hi, version))?
        }
        Command::Geodes { seed, start, count, kind } => {
            let Some(geode_type) = GeodeType::parse(&kind) else {
                bail!("unknown geode type `{kind}`");
            };
            let results = predict_geodes(seed, start, count, geode_type, version)
                .with_context(|| format!("geode query start={start} count={count}"))?;
            emit(&results)?;
        }
        Command::Mine { seed, day, floor_lo, floor_hi, only } => match only.as_deref() {
            None => emit(&predict_mine_floors(seed, day, floor_lo, floor_hi, version))?,
            Some("monster") => emit(&find_monster_floors(seed, day, floor_lo, floor_hi, version))?,
            Some("dark") => emit(&find_dark_floors(seed, day, floor_lo, floor_hi))?,
            Some("mushroom") => {
                emit(&find_mushroom_floors(seed, day, floor_lo, floor_hi, version))?
            }
            Some(other) => bail!("unknown floor predicate `{other}`"),
        },
        Command::Chests { seed, floor_lo, floor_hi } => {
            emit(&predict_mine_chests(seed, floor_lo, floor_hi))?
        }
        Command::FindItem { seed, item_id, max_days } => {
            match find_item_in_cart(seed, item_id, max_days, version) {
                Some((day, price)) => emit(&serde_json::json!({ "day": day, "price": price }))?,
                None => emit(&serde_json::json!(null))?,
            }
        }
        Command::Search { filter, seed_lo, seed_hi, max_results, workers } => {
            run_search(&filter, seed_lo, seed_hi, max_results, workers, version)?
        }
        Command::DayInfo { day } => emit(&serde_json::json!({
            "label": calendar::day_label(day),
            "day_of_week": calendar::day_of_week(day),
            "season": calendar::season(day),
            "year": calendar::year(day),
            "day_of_year": calendar::day_of_year(day),
            "is_cart_day": calendar::is_cart_day(day),
        }))?,
    }

    Ok(())
}

fn emit<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_search(
    filter_arg: &str,
    seed_lo: i32,
    seed_hi: i32,
    max_results: u32,
    workers: u32,
    version: GameVersion,
) -> Result<()> {
    if seed_lo > seed_hi {
        bail!("seed range is empty: {seed_lo} > {seed_hi}");
    }
    let filter_json = match filter_arg.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading filter file {path}"))?
        }
        None => filter_arg.to_string(),
    };
    // Surface a bad filter before spawning anything.
    seedseer_core::search::parse_filter(&filter_json)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("invalid filter")?;

    let workers = i64::from(workers.clamp(1, 256));
    let total_span = i64::from(seed_hi) - i64::from(seed_lo) + 1;
    let per_worker = (total_span + workers - 1) / workers;

    // Host-side coordination. Each worker's local search runs uncapped; the
    // shared counters decide when everyone stops, and the cap is re-applied
    // to the merged result below.
    let found = AtomicU64::new(0);
    let checked = AtomicU64::new(0);
    let stop = AtomicBool::new(false);
    let matches: Mutex<Vec<i32>> = Mutex::new(Vec::new());

    std::thread::scope(|scope| {
        for w in 0..workers {
            let lo = i64::from(seed_lo) + w * per_worker;
            if lo > i64::from(seed_hi) {
                break;
            }
            let hi = (lo + per_worker - 1).min(i64::from(seed_hi));
            let filter_json = &filter_json;
            let (found, checked, stop, matches) = (&found, &checked, &stop, &matches);

            scope.spawn(move || {
                let mut reported = 0u64;
                // Parse already validated above; an error here is unreachable.
                let _ = search_range(
                    filter_json,
                    lo as i32,
                    hi as i32,
                    u32::MAX,
                    version,
                    |worker_checked, _| {
                        checked.fetch_add(worker_checked - reported, Ordering::Relaxed);
                        reported = worker_checked;
                        !stop.load(Ordering::Relaxed)
                    },
                    |seed| {
                        let total = found.fetch_add(1, Ordering::Relaxed) + 1;
                        matches.lock().expect("match sink poisoned").push(seed);
                        if total >= u64::from(max_results) {
                            stop.store(true, Ordering::Relaxed);
                            return false;
                        }
                        true
                    },
                );
            });
        }
    });

    let mut seeds = matches.into_inner().expect("match sink poisoned");
    seeds.sort_unstable();
    seeds.truncate(max_results as usize);

    eprintln!(
        "checked {} seeds, found {} matches",
        checked.load(Ordering::Relaxed),
        seeds.len()
    );
    emit(&seeds)
}
