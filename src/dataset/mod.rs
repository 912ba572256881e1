//! Dataset ingestion: loading the two raw dataset shapes, cleaning, merging
//! and class balancing.

mod balance;
mod cleaning;
mod loader;
mod types;

pub use self::balance::{balance, DEFAULT_SEED, DEFAULT_TARGET_SIZE};
pub use self::cleaning::{
    category_counts, clean_primary, clean_secondary, merge, DEFAULT_EXCLUDED_CATEGORIES,
};
pub use self::loader::{load_csv, load_json_records, read_csv, read_json_records};
pub use self::types::*;

pub const TARGET_DATASET: &str = "dataset";
