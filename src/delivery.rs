/*!
 * Delivery of the finished snapshot document
 *
 * The builder never writes anywhere itself. Once a document is complete it is
 * handed exactly once to a [`Sink`]: the system clipboard, stdout, or a file.
 * Clipboard support detects an available mechanism (tmux, Wayland, X11,
 * macOS, WSL, Termux) and pipes the text into it.
 */

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

/// Error type for delivery operations
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The command is not available on the system
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for delivery operations
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Destination for a finished document
pub trait Sink {
    /// Hand over the full document
    fn deliver(&self, text: &str) -> Result<()>;

    /// Short human-readable name of the destination
    fn describe(&self) -> String;
}

/// Writes the document to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn deliver(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

/// Writes the document to a file, replacing it
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn deliver(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Copies the document to the system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardSink;

impl Sink for ClipboardSink {
    fn deliver(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardProvider {
    /// tmux paste buffer
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (via WSL)
    Wsl,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    /// Command line that reads the text from stdin
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::MacOS => ("pbcopy", &[]),
            Self::Wsl => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    fn copy(self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        debug!(provider = ?self, "copying to clipboard");
        pipe_to_command(cmd, args, text)
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Copy text to the clipboard
///
/// Uses the first clipboard mechanism detected on this system.
///
/// # Examples
/// ```no_run
/// use dirsnap::delivery::copy_to_clipboard;
///
/// if let Err(e) = copy_to_clipboard("Hello, clipboard!") {
///     eprintln!("Failed to copy to clipboard: {}", e);
/// }
/// ```
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = determine_clipboard_providers()
        .into_iter()
        .next()
        .ok_or(DeliveryError::NoClipboardFound)?;
    provider.copy(text)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        if env::split_paths(&paths).any(|dir| dir.join(command).is_file()) {
            return true;
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Spawn `cmd`, write `text` to its stdin and wait for it to exit
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DeliveryError::CommandNotFound(cmd.to_string()),
            _ => DeliveryError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)),
        })?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            DeliveryError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DeliveryError::CommandFailed(format!("Failed to write to {}: {}", cmd, e)))?;
    }
    // Close stdin so the child sees EOF
    drop(child.stdin.take());

    let status = child
        .wait()
        .map_err(|e| DeliveryError::CommandFailed(format!("Failed to wait for {}: {}", cmd, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(DeliveryError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Platform detection cache
static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "android") {
            "android"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else {
            "unknown"
        }
    })
}

/// Clipboard providers to try, in order of preference
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(3);

    if command_exists("tmux") && is_tmux_running() {
        providers.push(ClipboardProvider::Tmux);
    }

    match get_platform() {
        "macos" => {
            if command_exists("pbcopy") {
                providers.push(ClipboardProvider::MacOS);
            }
        }
        "windows" | "wsl" => {
            if command_exists("clip.exe") {
                providers.push(ClipboardProvider::Wsl);
            }
        }
        "linux" => {
            if env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
                providers.push(ClipboardProvider::Wayland);
            }
            if command_exists("xsel") {
                providers.push(ClipboardProvider::Xsel);
            }
            if command_exists("xclip") {
                providers.push(ClipboardProvider::Xclip);
            }
        }
        "android" => {
            if command_exists("termux-clipboard-set") {
                providers.push(ClipboardProvider::Termux);
            }
        }
        _ => {}
    }

    providers
}

/// Check if we are inside a running tmux session
fn is_tmux_running() -> bool {
    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
