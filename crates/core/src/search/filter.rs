//! Filter AST and the wire-format parser.
//!
//! Filters arrive as JSON. Instead of deriving the deserializer, the parser
//! walks the `serde_json` value tree carrying a path string, so a bad node is
//! reported as `conditions[2].event_type` rather than a byte offset. Shape
//! errors are caught here, before any seed is evaluated.

use std::fmt;

use serde_json::Value;

use crate::mechanics::{GeodeType, NightEvent, Weather};

/// Upper bound for day and floor fields. Keeps the day arithmetic inside the
/// seed formulas far away from i32 overflow.
pub const MAX_DAY: i32 = 1_000_000;

/// An inclusive day window attached to most conditions.
///
/// A window whose start exceeds its end is legal and empty: the condition
/// simply never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayRange {
    pub start: i32,
    pub end: i32,
}

impl DayRange {
    pub fn days(self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupLogic {
    And,
    Or,
}

/// A node of the filter tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterNode {
    Group { logic: GroupLogic, children: Vec<FilterNode> },
    Condition(Condition),
}

/// Target of a night-event condition: a specific event, or any event at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget {
    Any,
    Is(NightEvent),
}

/// Target of a weather condition: a specific kind, or anything non-sunny.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherTarget {
    Any,
    Is(Weather),
}

/// One leaf predicate over a seed.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    DailyLuck { days: DayRange, min_luck: f64, max_luck: f64 },
    CartItem { days: DayRange, item_id: i32, max_price: Option<i32> },
    NightEvent { days: DayRange, target: EventTarget },
    Geode { number: i32, geode_type: GeodeType, target_items: Vec<i32> },
    DishOfDay { days: DayRange, dish_id: i32 },
    Weather { days: DayRange, target: WeatherTarget },
    MineFloor {
        days: DayRange,
        floor_start: i32,
        floor_end: i32,
        no_monsters: bool,
        no_dark: bool,
        has_mushroom: bool,
    },
}

/// Why a filter document was rejected. Every variant names the node it
/// refused, as a dotted path from the document root.
#[derive(Debug)]
pub enum FilterParseError {
    Json(serde_json::Error),
    NotAnObject { path: String },
    MissingField { path: String, field: &'static str },
    InvalidField { path: String, field: &'static str, message: String },
    UnknownLogic { path: String, found: String },
    UnknownConditionType { path: String, found: String },
}

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "filter is not valid JSON: {e}"),
            Self::NotAnObject { path } => {
                write!(f, "filter node at `{path}` is not an object")
            }
            Self::MissingField { path, field } => {
                write!(f, "filter node at `{path}` is missing `{field}`")
            }
            Self::InvalidField { path, field, message } => {
                write!(f, "filter field `{path}.{field}` is invalid: {message}")
            }
            Self::UnknownLogic { path, found } => {
                write!(f, "filter node at `{path}` has unknown logic `{found}`")
            }
            Self::UnknownConditionType { path, found } => {
                write!(f, "filter node at `{path}` has unknown condition type `{found}`")
            }
        }
    }
}

impl std::error::Error for FilterParseError {}

impl From<serde_json::Error> for FilterParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Parse a filter document from its JSON wire format.
pub fn parse_filter(json: &str) -> Result<FilterNode, FilterParseError> {
    let value: Value = serde_json::from_str(json)?;
    parse_node(&value, "filter")
}

fn parse_node(value: &Value, path: &str) -> Result<FilterNode, FilterParseError> {
    let obj = value
        .as_object()
        .ok_or_else(|| FilterParseError::NotAnObject { path: path.to_string() })?;

    let logic = require_str(value, path, "logic")?;
    match logic {
        "and" | "or" => {
            let logic = if logic == "and" { GroupLogic::And } else { GroupLogic::Or };
            let children = match obj.get("conditions") {
                None => Vec::new(),
                Some(Value::Array(items)) => items
                    .iter()
                    .enumerate()
                    .map(|(i, child)| parse_node(child, &format!("{path}.conditions[{i}]")))
                    .collect::<Result<_, _>>()?,
                Some(_) => {
                    return Err(FilterParseError::InvalidField {
                        path: path.to_string(),
                        field: "conditions",
                        message: "expected an array".to_string(),
                    })
                }
            };
            Ok(FilterNode::Group { logic, children })
        }
        "condition" => parse_condition(value, path).map(FilterNode::Condition),
        other => Err(FilterParseError::UnknownLogic {
            path: path.to_string(),
            found: other.to_string(),
        }),
    }
}

fn parse_condition(value: &Value, path: &str) -> Result<Condition, FilterParseError> {
    let kind = require_str(value, path, "type")?;
    match kind {
        "daily_luck" => Ok(Condition::DailyLuck {
            days: day_range(value, path)?,
            min_luck: require_f64(value, path, "min_luck")?,
            max_luck: require_f64(value, path, "max_luck")?,
        }),
        "cart_item" => Ok(Condition::CartItem {
            days: day_range(value, path)?,
            item_id: require_i32(value, path, "item_id", 0, i32::MAX)?,
            max_price: optional_i32(value, path, "max_price")?,
        }),
        "night_event" => {
            let name = require_str(value, path, "event_type")?;
            let target = if name == "any" {
                EventTarget::Any
            } else {
                EventTarget::Is(NightEvent::parse(name).ok_or_else(|| {
                    FilterParseError::InvalidField {
                        path: path.to_string(),
                        field: "event_type",
                        message: format!("unknown event `{name}`"),
                    }
                })?)
            };
            Ok(Condition::NightEvent { days: day_range(value, path)?, target })
        }
        "geode" => {
            let name = require_str(value, path, "geode_type")?;
            let geode_type = GeodeType::parse(name).ok_or_else(|| {
                FilterParseError::InvalidField {
                    path: path.to_string(),
                    field: "geode_type",
                    message: format!("unknown geode type `{name}`"),
                }
            })?;
            let targets = value.get("target_items").ok_or_else(|| {
                FilterParseError::MissingField { path: path.to_string(), field: "target_items" }
            })?;
            let target_items = targets
                .as_array()
                .ok_or_else(|| FilterParseError::InvalidField {
                    path: path.to_string(),
                    field: "target_items",
                    message: "expected an array of item ids".to_string(),
                })?
                .iter()
                .map(|v| {
                    v.as_i64().and_then(|n| i32::try_from(n).ok()).ok_or_else(|| {
                        FilterParseError::InvalidField {
                            path: path.to_string(),
                            field: "target_items",
                            message: "expected 32-bit integer item ids".to_string(),
                        }
                    })
                })
                .collect::<Result<_, _>>()?;
            Ok(Condition::Geode {
                number: require_i32(value, path, "geode_number", 1, MAX_DAY)?,
                geode_type,
                target_items,
            })
        }
        "dish_of_day" => Ok(Condition::DishOfDay {
            days: day_range(value, path)?,
            dish_id: require_i32(value, path, "dish_id", 0, i32::MAX)?,
        }),
        "weather" => {
            let name = require_str(value, path, "weather_type")?;
            let target = if name == "any" {
                WeatherTarget::Any
            } else {
                WeatherTarget::Is(Weather::parse(name).ok_or_else(|| {
                    FilterParseError::InvalidField {
                        path: path.to_string(),
                        field: "weather_type",
                        message: format!("unknown weather `{name}`"),
                    }
                })?)
            };
            Ok(Condition::Weather { days: day_range(value, path)?, target })
        }
        "mine_floor" => Ok(Condition::MineFloor {
            days: day_range(value, path)?,
            floor_start: require_i32(value, path, "floor_start", 1, MAX_DAY)?,
            floor_end: require_i32(value, path, "floor_end", 1, MAX_DAY)?,
            no_monsters: require_bool(value, path, "no_monsters")?,
            no_dark: require_bool(value, path, "no_dark")?,
            has_mushroom: require_bool(value, path, "has_mushroom")?,
        }),
        other => Err(FilterParseError::UnknownConditionType {
            path: path.to_string(),
            found: other.to_string(),
        }),
    }
}

fn day_range(value: &Value, path: &str) -> Result<DayRange, FilterParseError> {
    Ok(DayRange {
        start: require_i32(value, path, "day_start", 1, MAX_DAY)?,
        end: require_i32(value, path, "day_end", 1, MAX_DAY)?,
    })
}

fn require_field<'v>(
    value: &'v Value,
    path: &str,
    field: &'static str,
) -> Result<&'v Value, FilterParseError> {
    match value.get(field) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(FilterParseError::MissingField { path: path.to_string(), field }),
    }
}

fn require_str<'v>(
    value: &'v Value,
    path: &str,
    field: &'static str,
) -> Result<&'v str, FilterParseError> {
    require_field(value, path, field)?.as_str().ok_or_else(|| FilterParseError::InvalidField {
        path: path.to_string(),
        field,
        message: "expected a string".to_string(),
    })
}

fn require_i32(
    value: &Value,
    path: &str,
    field: &'static str,
    lo: i32,
    hi: i32,
) -> Result<i32, FilterParseError> {
    let n = require_field(value, path, field)?.as_i64().and_then(|n| i32::try_from(n).ok());
    match n {
        Some(n) if (lo..=hi).contains(&n) => Ok(n),
        Some(n) => Err(FilterParseError::InvalidField {
            path: path.to_string(),
            field,
            message: format!("{n} is outside {lo}..={hi}"),
        }),
        None => Err(FilterParseError::InvalidField {
            path: path.to_string(),
            field,
            message: "expected a 32-bit integer".to_string(),
        }),
    }
}

fn optional_i32(
    value: &Value,
    path: &str,
    field: &'static str,
) -> Result<Option<i32>, FilterParseError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| FilterParseError::InvalidField {
                path: path.to_string(),
                field,
                message: "expected a 32-bit integer or null".to_string(),
            }),
    }
}

fn require_f64(value: &Value, path: &str, field: &'static str) -> Result<f64, FilterParseError> {
    require_field(value, path, field)?.as_f64().ok_or_else(|| FilterParseError::InvalidField {
        path: path.to_string(),
        field,
        message: "expected a number".to_string(),
    })
}

fn require_bool(value: &Value, path: &str, field: &'static str) -> Result<bool, FilterParseError> {
    require_field(value, path, field)?.as_bool().ok_or_else(|| FilterParseError::InvalidField {
        path: path.to_string(),
        field,
        message: "expected a boolean".to_string(),
    })
}
