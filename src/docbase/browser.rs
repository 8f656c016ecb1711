use crate::error::{DocbaseError, Result};
use std::process::{Command, Stdio};

/// Opens `url` in the system browser.
/// - macOS: `open`
/// - Windows: `cmd /C start`
/// - everything else: `xdg-open`
pub fn open_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(DocbaseError::Browser("post has no URL".to_string()));
    }

    let mut cmd = browser_command(url);
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            DocbaseError::Browser(format!("failed to run {:?}: {}", cmd.get_program(), e))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(DocbaseError::Browser(format!(
            "{:?} exited with {}",
            cmd.get_program(),
            status
        )))
    }
}

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        // The empty string is the window title `start` expects first.
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
