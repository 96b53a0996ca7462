//! Compiled pattern libraries for unit and word detection.
//!
//! Rule tables are generated once by crossing a small set of general
//! templates against the supported-word and unit tables, then compiled into
//! immutable rule sets. Nothing here mutates after construction: callers who
//! change configuration compile a fresh rule set and swap the whole value.

pub mod exclusion;
pub mod grammar;
pub mod numeral;
pub mod unit;

pub use exclusion::ExclusionRules;
pub use grammar::{WordRule, WordRuleKind, WordType};
pub use numeral::parse_numeral;
pub use unit::{UnitPattern, UnitType};
