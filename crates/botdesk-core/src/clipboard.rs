//! Host clipboard access.

use std::io::Write;
use std::process::{Command, Stdio};

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard program could be found on this host
    #[error("Clipboard not available: {0}")]
    Unavailable(String),

    /// The clipboard program ran but refused the copy
    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),

    /// I/O error talking to the clipboard program
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Programs tried, in order, when no clipboard command is configured.
const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
];

/// Clipboard that pipes text into an external program's stdin.
#[derive(Debug, Clone, Default)]
pub struct CommandClipboard {
    command: Option<Vec<String>>,
}

impl CommandClipboard {
    /// Probe the usual platform programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always use `command` (program followed by its arguments).
    pub fn with_command(command: Vec<String>) -> Self {
        Self {
            command: Some(command),
        }
    }

    fn run(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits without reading is judged by its exit status.
            match stdin.write_all(text.as_bytes()) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{program} exited with {status}"
            )))
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(command) = &self.command {
            let (program, args) = command
                .split_first()
                .ok_or_else(|| ClipboardError::Unavailable("empty clipboard command".to_string()))?;
            return Self::run(program, args, text);
        }

        for candidate in DEFAULT_COMMANDS {
            let program = candidate[0];
            let args: Vec<String> = candidate[1..].iter().map(|s| s.to_string()).collect();
            match Self::run(program, &args, text) {
                Ok(()) => {
                    tracing::debug!(program, "copied to clipboard");
                    return Ok(());
                }
                Err(ClipboardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ClipboardError::Unavailable(
            "install pbcopy, wl-copy or xclip, or set clipboard_command".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_unavailable() {
        let clipboard = CommandClipboard::with_command(Vec::new());
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let clipboard =
            CommandClipboard::with_command(vec!["botdesk-no-such-clipboard-program".to_string()]);
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_receives_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("clip.txt");
        let clipboard = CommandClipboard::with_command(vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("cat > '{}'", out.display()),
        ]);

        clipboard.write_text("<iframe>").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<iframe>");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_command_failed() {
        let clipboard = CommandClipboard::with_command(vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat > /dev/null; exit 3".to_string(),
        ]);
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed(_)));
    }
}
