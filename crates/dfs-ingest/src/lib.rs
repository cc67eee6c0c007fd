//! Salary feed ingestion.
//!
//! Turns provider exports with uncontrolled column names into canonical
//! [`PlayerRecord`](dfs_model::PlayerRecord)s. Rows that cannot be resolved
//! are dropped, but every decision is kept as a [`RowOutcome`] so callers can
//! explain an empty result.

pub mod error;
pub mod game;
pub mod headers;
pub mod normalize;
pub mod reader;
pub mod row;

pub use error::{IngestError, Result};
pub use game::derive_opponent;
pub use headers::{FieldKey, HeaderIndex};
pub use normalize::{
    NormalizedFeed, RejectReason, RowOutcome, normalize_players, normalize_row, parse_salary,
    strip_name_id,
};
pub use reader::{parse_csv_rows, read_csv_rows};
pub use row::FeedRow;
