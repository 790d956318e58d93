//! Side effects the launcher performs on behalf of an activated action.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to open URL: {0}")]
    Open(#[source] io::Error),

    #[error("no clipboard tool available (tried wl-copy, xclip, xsel, pbcopy, clip)")]
    NoClipboard,
}

/// Services provided by the launcher hosting the plugin.
pub trait Host {
    fn open_url(&self, url: &str) -> Result<(), HostError>;
    fn set_clipboard_text(&self, text: &str) -> Result<(), HostError>;
}

/// Host backed by the desktop: default browser and the platform clipboard tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn open_url(&self, url: &str) -> Result<(), HostError> {
        debug!(url, "opening URL");
        open::that(url).map_err(HostError::Open)
    }

    fn set_clipboard_text(&self, text: &str) -> Result<(), HostError> {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        let candidates: [(&str, &[&str], bool); 5] = [
            ("wl-copy", &[], wayland),
            ("xclip", &["-selection", "clipboard"], true),
            ("xsel", &["--clipboard", "--input"], true),
            ("pbcopy", &[], cfg!(target_os = "macos")),
            ("clip", &[], cfg!(windows)),
        ];
        for (cmd, args, applicable) in candidates {
            if applicable && pipe_to(cmd, args, text) {
                debug!(tool = cmd, "copied to clipboard");
                return Ok(());
            }
        }
        Err(HostError::NoClipboard)
    }
}

fn pipe_to(cmd: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };
    let written = child
        .stdin
        .take()
        .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());
    let exited_ok = child.wait().is_ok_and(|status| status.success());
    written && exited_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_not_a_success() {
        assert!(!pipe_to("wikiquery-no-such-clipboard-tool", &[], "text"));
    }

    #[test]
    fn no_clipboard_message_lists_tools() {
        let msg = HostError::NoClipboard.to_string();
        assert!(msg.contains("wl-copy"));
        assert!(msg.contains("xclip"));
    }
}
