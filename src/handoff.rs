//! Handing non-web links to the operating system and telling the user about it

use std::{fmt, io, process::Command};

/// Result of asking the operating system to open a URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// Some installed application accepted the URI
    Handled,
    /// Nothing on this system can open the URI
    NoHandlerFound,
    /// A handler exists but launching it failed
    LaunchFailed(String),
}

impl HandoffOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl fmt::Display for HandoffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled => f.write_str("handled"),
            Self::NoHandlerFound => f.write_str("no handler found"),
            Self::LaunchFailed(reason) => write!(f, "launch failed: {}", reason),
        }
    }
}

/// Opens URIs the navigator cannot render itself (`mailto:`, `tel:`, app schemes, ...)
pub trait ExternalHandler {
    fn open(&mut self, uri: &str) -> HandoffOutcome;
}

/// Transient, dismissible message shown to the user
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Hands URIs to the platform's generic opener
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_program("open", &[])
        } else if cfg!(target_os = "windows") {
            Self::with_program("cmd", &["/C", "start", ""])
        } else {
            Self::with_program("xdg-open", &[])
        }
    }
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific opener program; `args` go before the URI
    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_string(), args: args.iter().map(|a| a.to_string()).collect() }
    }
}

impl ExternalHandler for SystemOpener {
    fn open(&mut self, uri: &str) -> HandoffOutcome {
        log::debug!("Handing {} to {}", uri, self.program);

        match Command::new(&self.program).args(&self.args).arg(uri).status() {
            Ok(status) if status.success() => HandoffOutcome::Handled,
            Ok(status) => HandoffOutcome::LaunchFailed(format!("{} exited with {}", self.program, status)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HandoffOutcome::NoHandlerFound,
            Err(e) => HandoffOutcome::LaunchFailed(e.to_string()),
        }
    }
}
