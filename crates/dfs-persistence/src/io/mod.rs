//! File I/O shared by the lineup store and the player cache.

mod hash;
mod load;
mod save;

pub use hash::{compute_file_hash, verify_file_hash};
pub use load::read_json;
pub use save::{remove_file, write_json_atomic};
