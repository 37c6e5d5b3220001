//! The leaf predicates. Each one is a pure function over a single normalized property value and
//! the parameters of one filter control; none of them log or allocate per listing beyond what the
//! comparison needs.

pub mod boundary;
pub mod category;
pub mod flag;
pub mod range;
pub mod text;

pub use boundary::{within_any_boundary, BoundarySet};
pub use category::{set_includes, Vocabulary};
pub use flag::{flag_matches, FlagRule, TriState, MOBILE_HOME};
pub use range::{date_includes, range_includes, Range};
pub use text::{text_matches, TermPattern};

/// Pseudo-category that selects listings whose value is missing.
pub const UNKNOWN: &str = "Unknown";
