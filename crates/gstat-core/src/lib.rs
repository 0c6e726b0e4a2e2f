pub mod matcher;
pub mod normalize;

pub use matcher::{RankedMatch, rank};
pub use normalize::normalize_query;
