//! Concurrent async checksums on tokio.
//!
//! Each file is read through `tokio_util::compat`, so the runtime-agnostic
//! future runs on tokio's reactor.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- FILE...

use std::env;

use s3crc::{EngineConfig, checksum_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    println!("Checksumming {} files concurrently...\n", paths.len());

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let file = tokio::fs::File::open(&path).await?;
                let sum = checksum_async(file.compat(), EngineConfig::default()).await?;
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>((path, sum))
            })
        })
        .collect();

    for handle in handles {
        match handle.await? {
            Ok((path, sum)) => println!("{}  {}", sum.to_base64(), path),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}
