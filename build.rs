#[path = "shared/constants.rs"]
mod constants;
use constants::{ALIAS_TABLE_CSV_FILE_PATH, COMPRESSED_ALIAS_TABLE_FILE_NAME};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        ALIAS_TABLE_CSV_FILE_PATH.display()
    );

    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_ALIAS_TABLE_FILE_NAME);

    let mut input_file = File::open(&*ALIAS_TABLE_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    // Compress the alias table straight into OUT_DIR
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
