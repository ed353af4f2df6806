//! Emptiness normalization, frequency ranking and dashboard aggregation.

pub mod aggregate;
pub mod emptiness;
pub mod ranking;

pub use aggregate::{
    aggregate, AggregateSnapshot, PENDING_PREVIEW_LEN, TOP_COMPLAINTS_LIMIT, TOP_ITEMS_LIMIT,
    TOP_OBSTACLES_LIMIT,
};
pub use emptiness::{is_empty, is_unlabelled};
pub use ranking::{rank_top, RankedEntry};
