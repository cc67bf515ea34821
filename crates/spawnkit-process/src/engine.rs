//! Execution engine - spawn, drain, wait, classify

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    capture::{Capture, CapturedOutput},
    descriptor::ProcessDescriptor,
    error::{ProcessError, Result},
};

/// Run one process to completion under the given capture policy
///
/// Blocks the calling task until the child has terminated and every captured
/// pipe has been drained to end-of-stream. Returns the [`CapturedOutput`]
/// variant matching `capture` on exit code zero, [`ProcessError::ExitFailure`]
/// on any nonzero exit, and [`ProcessError::Io`] when spawning, draining, or
/// waiting fails.
///
/// There is no timeout or cancellation: a child that never terminates hangs
/// the caller.
///
/// # Examples
/// ```no_run
/// use spawnkit_fs::File;
/// use spawnkit_process::{run, Capture, ProcessDescriptor};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let descriptor = ProcessDescriptor::new(File::new("echo")?).args(["hi"]);
/// let captured = run(&descriptor, Capture::Stdout).await?;
/// assert_eq!(captured.stdout(), Some(b"hi\n".as_slice()));
/// # Ok(())
/// # }
/// ```
pub async fn run(descriptor: &ProcessDescriptor, capture: Capture) -> Result<CapturedOutput> {
    let mut command = build_command(descriptor, capture);

    debug!(
        command = %descriptor.command,
        args = ?descriptor.args,
        capture = ?capture,
        "spawning process"
    );

    let mut child = command
        .spawn()
        .map_err(|e| ProcessError::io(descriptor, e))?;

    let captured = match capture {
        Capture::Pass => CapturedOutput::None,
        Capture::Stdout => {
            let pipe = take_pipe(child.stdout.take(), descriptor, "stdout")?;
            let bytes = drain(pipe)
                .await
                .map_err(|e| ProcessError::io(descriptor, e))?;
            CapturedOutput::Stdout(bytes)
        }
        Capture::Stderr => {
            let pipe = take_pipe(child.stderr.take(), descriptor, "stderr")?;
            let bytes = drain(pipe)
                .await
                .map_err(|e| ProcessError::io(descriptor, e))?;
            CapturedOutput::Stderr(bytes)
        }
        Capture::Both => {
            let stdout_pipe = take_pipe(child.stdout.take(), descriptor, "stdout")?;
            let stderr_pipe = take_pipe(child.stderr.take(), descriptor, "stderr")?;

            // Both drains must run independently: the child stalls once it
            // fills one bounded pipe buffer, so a parent still blocked reading
            // the other pipe would never see end-of-stream on either.
            let stdout_task: JoinHandle<io::Result<Vec<u8>>> = tokio::spawn(drain(stdout_pipe));
            let stderr_task: JoinHandle<io::Result<Vec<u8>>> = tokio::spawn(drain(stderr_pipe));

            let (stdout, stderr) = tokio::join!(stdout_task, stderr_task);
            CapturedOutput::Both {
                stdout: joined(stdout, descriptor)?,
                stderr: joined(stderr, descriptor)?,
            }
        }
    };

    // Both drains have been joined; only now is the exit status queried.
    let status = child
        .wait()
        .await
        .map_err(|e| ProcessError::io(descriptor, e))?;

    debug!(command = %descriptor.command, code = exit_code(&status), "process exited");

    classify(descriptor, status, captured)
}

/// Translate a descriptor and policy into a spawnable command
///
/// Stdin is always inherited. Each output stream is piped iff the policy
/// captures it and inherited otherwise, so uncaptured output reaches the
/// parent's console in real time.
fn build_command(descriptor: &ProcessDescriptor, capture: Capture) -> Command {
    let mut command = Command::new(descriptor.command.as_path());
    command.args(&descriptor.args);

    if let Some(ref dir) = descriptor.working_dir {
        command.current_dir(dir.as_path());
    }

    // None inherits the parent environment untouched; Some replaces it
    // wholesale.
    if let Some(ref env) = descriptor.env {
        command.env_clear();
        command.envs(env);
    }

    command.stdin(Stdio::inherit());
    command.stdout(pipe_or_inherit(capture.captures_stdout()));
    command.stderr(pipe_or_inherit(capture.captures_stderr()));

    command
}

fn pipe_or_inherit(captured: bool) -> Stdio {
    if captured {
        Stdio::piped()
    } else {
        Stdio::inherit()
    }
}

/// Fully read one pipe to end-of-stream into an in-memory buffer
async fn drain<R>(mut pipe: R) -> io::Result<Vec<u8>>
where
    R: AsyncReadExt + Unpin,
{
    let mut buf = Vec::new();
    pipe.read_to_end(&mut buf).await?;
    Ok(buf)
}

fn take_pipe<P>(pipe: Option<P>, descriptor: &ProcessDescriptor, name: &str) -> Result<P> {
    pipe.ok_or_else(|| {
        ProcessError::io(
            descriptor,
            io::Error::new(
                io::ErrorKind::Other,
                format!("{name} pipe was not opened for capture"),
            ),
        )
    })
}

/// Flatten a drain task's join result into the engine error space
///
/// A panicked drain task surfaces as [`ProcessError::Io`] like any other
/// drain failure; nothing escapes classification.
fn joined(
    result: std::result::Result<io::Result<Vec<u8>>, tokio::task::JoinError>,
    descriptor: &ProcessDescriptor,
) -> Result<Vec<u8>> {
    match result {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => Err(ProcessError::io(descriptor, e)),
        Err(join_error) => Err(ProcessError::io(
            descriptor,
            io::Error::new(io::ErrorKind::Other, join_error),
        )),
    }
}

/// Plain-integer view of an exit status
///
/// Normal exits report the OS code. On Unix a signal-terminated child is
/// reported as the negated signal number; a status with neither maps to `-1`.
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            return status.signal().map(|signal| -signal).unwrap_or(-1);
        }
        #[allow(unreachable_code)]
        -1
    }
}

/// Classify one raw outcome into the two-kind error taxonomy
///
/// Runs exactly once per call and never retries. Capture has already
/// completed by this point, so partial output written before a failing exit
/// has been fully drained even though `ExitFailure` does not re-expose it.
fn classify(
    descriptor: &ProcessDescriptor,
    status: ExitStatus,
    captured: CapturedOutput,
) -> Result<CapturedOutput> {
    if status.success() {
        Ok(captured)
    } else {
        Err(ProcessError::ExitFailure {
            descriptor: descriptor.clone(),
            code: exit_code(&status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spawnkit_fs::File;

    fn descriptor(command: &str) -> ProcessDescriptor {
        ProcessDescriptor::new(File::new(command).unwrap())
    }

    #[tokio::test]
    async fn test_pass_has_no_payload() {
        let captured = run(&descriptor("true"), Capture::Pass).await.unwrap();
        assert_eq!(captured, CapturedOutput::None);
    }

    #[tokio::test]
    async fn test_captures_stdout_bytes_exactly() {
        let captured = run(&descriptor("echo").arg("hello"), Capture::Stdout)
            .await
            .unwrap();
        assert_eq!(captured, CapturedOutput::Stdout(b"hello\n".to_vec()));
    }

    #[tokio::test]
    async fn test_captures_stderr_bytes_exactly() {
        let d = descriptor("sh").args(["-c", "printf err-only >&2"]);
        let captured = run(&d, Capture::Stderr).await.unwrap();
        assert_eq!(captured, CapturedOutput::Stderr(b"err-only".to_vec()));
    }

    #[tokio::test]
    async fn test_captures_both_streams_independently() {
        let d = descriptor("sh").args(["-c", "printf out; printf err >&2"]);
        let captured = run(&d, Capture::Both).await.unwrap();
        assert_eq!(
            captured,
            CapturedOutput::Both {
                stdout: b"out".to_vec(),
                stderr: b"err".to_vec(),
            }
        );
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_exit_failure() {
        let d = descriptor("false");
        let err = run(&d, Capture::Pass).await.unwrap_err();
        match err {
            ProcessError::ExitFailure { descriptor, code } => {
                assert_eq!(descriptor, d);
                assert_eq!(code, 1);
            }
            other => panic!("expected ExitFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exit_failure_reports_specific_code() {
        let d = descriptor("sh").args(["-c", "exit 42"]);
        let err = run(&d, Capture::Pass).await.unwrap_err();
        assert_eq!(err.exit_code(), Some(42));
    }

    #[tokio::test]
    async fn test_capture_completes_even_on_failing_exit() {
        // Partial output written before the failing exit must not be lost,
        // but the error itself does not re-expose it.
        let d = descriptor("sh").args(["-c", "printf partial; exit 3"]);
        let err = run(&d, Capture::Stdout).await.unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(err.descriptor(), &d);
    }

    #[tokio::test]
    async fn test_missing_command_is_io_error() {
        let d = descriptor("/no/such/spawnkit/binary");
        let err = run(&d, Capture::Pass).await.unwrap_err();
        match err {
            ProcessError::Io { descriptor, source } => {
                assert_eq!(descriptor, d);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_env_override_replaces_environment() {
        use std::collections::BTreeMap;

        let env = BTreeMap::from([("SPAWNKIT_MARKER".to_string(), "set".to_string())]);
        let d = ProcessDescriptor::new(File::new("/bin/sh").unwrap())
            .args(["-c", "printf %s \"$SPAWNKIT_MARKER:$HOME\""])
            .env_override(env);

        let captured = run(&d, Capture::Stdout).await.unwrap();
        // The override map is the whole environment: HOME is gone.
        assert_eq!(captured, CapturedOutput::Stdout(b"set:".to_vec()));
    }

    #[test]
    fn test_exit_code_of_normal_exit() {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            assert_eq!(exit_code(&ExitStatus::from_raw(0)), 0);
            // Raw wait status 9 = terminated by SIGKILL.
            assert_eq!(exit_code(&ExitStatus::from_raw(9)), -9);
            // Raw wait status 0x2a00 = exited with code 42.
            assert_eq!(exit_code(&ExitStatus::from_raw(0x2a00)), 42);
        }
    }
}
