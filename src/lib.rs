//! # Anglicise
//!
//! A text conversion library that rewrites American English prose into
//! British English: spelling (colour, organise, litre), contextual words
//! whose British spelling depends on grammatical role (licence/license,
//! practice/practise), and US-customary measurements converted to metric
//! (12 feet → 3.7 metres, 72°F → 22.2°C).
//!
//! ## Features
//!
//! - Confidence-scored span detection with deterministic overlap resolution
//! - Grammar-pattern disambiguation of noun/verb spelling pairs
//! - Unit detection and metric conversion with best-fit display units
//! - Code, markdown, and URL awareness: fenced blocks, inline code, and
//!   link targets stay byte-identical
//! - `m2e-ignore` comment directives for opting lines or files out
//! - Pure, synchronous pipeline; a [`Converter`] is immutable after
//!   construction and safe to share across threads
//!
//! ## Example
//!
//! ```
//! use anglicise::Converter;
//! use anglicise::config::{UnitConfig, WordConfig};
//!
//! let converter = Converter::new(UnitConfig::default(), WordConfig::default()).unwrap();
//! let output = converter
//!     .convert_to_regional("The room is 12 feet wide and my favorite color is gray.", false)
//!     .unwrap();
//! assert_eq!(
//!     output,
//!     "The room is 3.7 metres wide and my favourite colour is grey."
//! );
//! ```

pub mod config;
pub mod convert;
pub mod converter;
pub mod detect;
pub mod dictionary;
pub mod error;
pub mod pattern;
pub mod scoring;
pub mod segment;
pub mod span;
pub mod util;

pub use converter::Converter;
pub use error::{AngliciseError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
