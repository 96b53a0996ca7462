//! Segmentation front-end: decides which byte ranges of the input are
//! eligible for conversion before any detector runs.
//!
//! Three passes in fixed order: ignore directives, code awareness, markdown
//! preservation. Each pass yields byte ranges of the original string; the
//! converter subtracts them from detector output rather than mutating the
//! text.

pub mod code;
pub mod directive;
pub mod markdown;

pub use code::{CodeSegments, looks_like_code};
pub use directive::IgnoreDirectives;
pub use markdown::protected_ranges;
