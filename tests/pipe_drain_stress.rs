//! Regression Test Suite: Concurrent Pipe Draining
//!
//! A child that interleaves large writes to stdout and stderr stalls as soon
//! as one pipe buffer fills while the parent is still blocked reading the
//! other. An engine that drained the captured pipes sequentially would hang
//! here forever; these tests pass only with both drains running
//! independently.

use spawnkit_fs::File;
use spawnkit_process::{call, Capture, ProcessError};

/// Bytes written per `printf` invocation.
const CHUNK: usize = 4096;
/// Chunks per stream: 2560 * 4096 bytes = 10 MiB on each of stdout and stderr.
const CHUNKS: usize = 2560;

fn id(e: ProcessError) -> ProcessError {
    e
}

#[tokio::test]
async fn test_both_capture_survives_ten_megabytes_per_stream() {
    // Alternates fixed-width writes between the two streams so both pipe
    // buffers fill no matter which one the parent reads first.
    let script = format!(
        "i=0; while [ $i -lt {CHUNKS} ]; do printf '%{CHUNK}d' \"$i\"; printf '%{CHUNK}d' \"$i\" >&2; i=$((i+1)); done"
    );

    let captured = call(
        id,
        File::new("sh").unwrap(),
        ["-c", script.as_str()],
        Capture::Both,
    )
    .await
    .expect("writer child should run to completion");

    assert_eq!(captured.stdout().map(<[u8]>::len), Some(CHUNK * CHUNKS));
    assert_eq!(captured.stderr().map(<[u8]>::len), Some(CHUNK * CHUNKS));
}

#[tokio::test]
async fn test_interleaved_streams_capture_byte_for_byte() {
    let script = "i=0; while [ $i -lt 200 ]; do printf o; printf e >&2; i=$((i+1)); done";

    let captured = call(id, File::new("sh").unwrap(), ["-c", script], Capture::Both)
        .await
        .expect("writer child should run to completion");

    assert_eq!(captured.stdout(), Some("o".repeat(200).as_bytes()));
    assert_eq!(captured.stderr(), Some("e".repeat(200).as_bytes()));
}

#[tokio::test]
async fn test_single_stream_capture_handles_large_output() {
    // Only stdout is captured; stderr is inherited and cannot be bounded by
    // parent-side buffering, so one inline drain is sufficient.
    let script = format!("i=0; while [ $i -lt {CHUNKS} ]; do printf '%{CHUNK}d' \"$i\"; i=$((i+1)); done");

    let captured = call(
        id,
        File::new("sh").unwrap(),
        ["-c", script.as_str()],
        Capture::Stdout,
    )
    .await
    .expect("writer child should run to completion");

    assert_eq!(captured.into_stdout().map(|b| b.len()), Some(CHUNK * CHUNKS));
}
