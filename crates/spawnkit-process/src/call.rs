//! Convenience entry points

use spawnkit_fs::{Directory, File};

use crate::{
    capture::{Capture, CapturedOutput},
    descriptor::ProcessDescriptor,
    engine,
    error::ProcessError,
};

/// Run `command` with `args`, mapping any failure through `to_error`
///
/// `to_error` is a pure embedding of [`ProcessError`] into the caller's error
/// domain; pass `|e| e` to keep the process error as-is.
///
/// # Examples
/// ```no_run
/// use spawnkit_fs::File;
/// use spawnkit_process::{call, Capture, ProcessError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let captured = call(
///     |e: ProcessError| format!("git failed: {e}"),
///     File::new("git")?,
///     ["rev-parse", "HEAD"],
///     Capture::Stdout,
/// )
/// .await?;
/// let head = captured.into_text()?.into_stdout();
/// # Ok(())
/// # }
/// ```
pub async fn call<E, F, I, S>(
    to_error: F,
    command: File,
    args: I,
    capture: Capture,
) -> Result<CapturedOutput, E>
where
    F: FnOnce(ProcessError) -> E,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let descriptor = ProcessDescriptor::new(command).args(args);
    engine::run(&descriptor, capture).await.map_err(to_error)
}

/// Run `command` with `args` from the working directory `dir`
pub async fn call_in<E, F, I, S>(
    to_error: F,
    dir: Directory,
    command: File,
    args: I,
    capture: Capture,
) -> Result<CapturedOutput, E>
where
    F: FnOnce(ProcessError) -> E,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let descriptor = ProcessDescriptor::new(command).args(args).working_dir(dir);
    engine::run(&descriptor, capture).await.map_err(to_error)
}

/// Run `command` with `args` under [`Capture::Pass`], discarding the payload
///
/// Output appears on the parent's inherited streams in real time; only the
/// classified result comes back. The engine producing anything but an empty
/// payload under `Pass` would be a programmer error, not a runtime condition.
pub async fn call_unit<E, F, I, S>(to_error: F, command: File, args: I) -> Result<(), E>
where
    F: FnOnce(ProcessError) -> E,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let descriptor = ProcessDescriptor::new(command).args(args);
    let captured = engine::run(&descriptor, Capture::Pass)
        .await
        .map_err(to_error)?;
    debug_assert!(
        matches!(captured, CapturedOutput::None),
        "Pass policy produced a captured payload"
    );
    Ok(())
}

/// Run `command` with `args` from `dir` under [`Capture::Pass`]
pub async fn call_unit_in<E, F, I, S>(
    to_error: F,
    dir: Directory,
    command: File,
    args: I,
) -> Result<(), E>
where
    F: FnOnce(ProcessError) -> E,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let descriptor = ProcessDescriptor::new(command).args(args).working_dir(dir);
    let captured = engine::run(&descriptor, Capture::Pass)
        .await
        .map_err(to_error)?;
    debug_assert!(
        matches!(captured, CapturedOutput::None),
        "Pass policy produced a captured payload"
    );
    Ok(())
}
