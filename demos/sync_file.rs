//! File checksum example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use s3crc::{Crc64Engine, EngineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Checksumming file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes", metadata.len());

    // Larger read buffer for big files
    let engine = Crc64Engine::new(EngineConfig::new(256 * 1024)?);
    let sum = engine.checksum(file)?;

    println!("hex:    {}", sum.to_hex());
    println!("base64: {}", sum.to_base64());

    Ok(())
}
