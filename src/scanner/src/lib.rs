//! Loads a binary guide index ([`index`]) and answers the two query kinds
//! the system supports against it: exact match ([`exact`]) and off-target
//! scoring ([`offtarget`]).

mod error;
mod exact;
mod index;
mod offtarget;
mod query;

pub use error::ScannerError;
pub use exact::search_exact;
pub use index::GuideIndex;
pub use offtarget::{score_one, scan, OffTargetResult, OVERFLOW_THRESHOLD};
pub use query::Query;
