use std::path::Path;
use std::process::{Command, Stdio};

use crate::foundation::error::{StillreelError, StillreelResult};

/// Platform command that opens a file in the default viewer.
pub fn viewer_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    cmd
}

/// Open `path` in the default image viewer without waiting for it to close.
pub fn show_image(path: &Path) -> StillreelResult<()> {
    viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|e| {
            StillreelError::Other(anyhow::anyhow!(
                "failed to open '{}' in a viewer: {e}",
                path.display()
            ))
        })
}
