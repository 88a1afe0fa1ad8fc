#![allow(unused)] // Ignore due to all constants not being utilized across all environemnts

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static ALIAS_TABLE_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "alias_table.csv"));

/// Must stay in sync with the `include_bytes!` path in `src/models/alias_table.rs`.
pub static COMPRESSED_ALIAS_TABLE_FILE_NAME: &str = "alias_table.csv.gz";
