// Integration tests for the runtime-agnostic async API

#![cfg(feature = "async-io")]

use std::io::{self, Write};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::io::AsyncRead;
use s3crc::{ChecksumError, Crc64, Crc64Engine, EngineConfig, checksum_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::test]
async fn test_async_matches_sync_on_file() {
    let data: Vec<u8> = (0..300_000).map(|i| (i * 31 + 7) as u8).collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();

    let reader = tokio::fs::File::open(file.path()).await.unwrap();
    let sum = checksum_async(reader.compat(), EngineConfig::default())
        .await
        .unwrap();

    let sync = Crc64Engine::default()
        .checksum(std::fs::File::open(file.path()).unwrap())
        .unwrap();
    assert_eq!(sum, sync);
    assert_eq!(sum, Crc64::checksum(&data));
}

#[tokio::test]
async fn test_async_check_value_small_buffer() {
    let reader: &[u8] = b"123456789";
    let sum = checksum_async(reader, EngineConfig::new(4).unwrap())
        .await
        .unwrap();
    assert_eq!(sum.to_base64(), "rosUhgp5mIg=");
}

#[tokio::test]
async fn test_async_closed_pipe_is_empty_stream() {
    let (client, server) = tokio::io::duplex(64);
    drop(server);

    let sum = checksum_async(client.compat(), EngineConfig::default())
        .await
        .unwrap();
    assert_eq!(sum.value(), 0);
}

#[tokio::test]
async fn test_async_read_error_yields_no_checksum() {
    let result = checksum_async(Broken, EngineConfig::default()).await;
    match result {
        Err(ChecksumError::Io(e)) => assert_eq!(e.to_string(), "disk on fire"),
        other => panic!("expected read failure, got {:?}", other),
    }
}

struct Broken;

impl AsyncRead for Broken {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::other("disk on fire")))
    }
}
