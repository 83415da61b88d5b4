use std::ffi::OsStr;
use std::process::{Command, Stdio};

use url::Url;

/// Launches a program with the given arguments, detached from
/// the launcher process.
pub fn execute_with_args(
    program: impl AsRef<OsStr>,
    args: impl IntoIterator<Item = impl AsRef<OsStr>>,
) -> anyhow::Result<()> {
    let program = program.as_ref();

    tracing::debug!("executing {program:?}");

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}

/// Opens a url in the default browser.
pub fn open_url(url: &Url) -> anyhow::Result<()> {
    tracing::debug!("opening {url}");
    open::that_detached(url.as_str()).map_err(Into::into)
}
