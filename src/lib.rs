//! # browser-shell
//!
//! A minimal browser shell: type a URL or a search query into the address bar,
//! load it, step back, and keep a home page across restarts. Pages are rendered
//! by Chrome/Chromium driven over the Chrome DevTools Protocol (CDP).
//!
//! ## Address bar input
//!
//! The core of the crate is a pure function deciding what typed text means:
//!
//! ```rust
//! use browser_shell::address::resolve;
//!
//! assert_eq!(resolve("github.com").unwrap().as_str(), "https://github.com");
//! assert_eq!(
//!     resolve("best rust book").unwrap().as_str(),
//!     "https://www.google.com/search?q=best+rust+book"
//! );
//! assert!(resolve("   ").is_none());
//! ```
//!
//! Input containing whitespace is a search. Otherwise an explicit `http(s)://`
//! scheme, a dot or `localhost[:port]` makes it an address, and anything else is
//! searched for.
//!
//! ## Running the shell
//!
//! ```bash
//! # Headless browser, home page from the per-user preferences file
//! cargo run --bin browser-shell
//!
//! # Visible browser window
//! cargo run --bin browser-shell -- --headed
//! ```
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use browser_shell::{BrowserSession, BrowserShell, FileHomeStore, LaunchOptions};
//! use browser_shell::tools::{ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! # fn main() -> browser_shell::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let mut shell = BrowserShell::new(session).with_home_store(FileHomeStore::new("prefs.json"));
//! shell.start()?;
//!
//! let registry = ToolRegistry::with_defaults();
//! let mut context = ToolContext::new(&mut shell);
//! registry.execute("load", json!({"input": "rust lang"}), &mut context)?;
//! registry.execute("back", json!({}), &mut context)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`address`]: input classification, URL normalization and search query encoding
//! - [`browser`]: the [`Navigator`] interface and its Chrome-backed implementation
//! - [`home`]: persisted home page
//! - [`handoff`]: opening non-web links with other applications, user notifications
//! - [`shell`]: the shell tying these together
//! - [`tools`]: shell actions addressable by name
//! - [`error`]: error types and result aliases

pub mod address;
pub mod browser;
pub mod error;
pub mod handoff;
pub mod home;
pub mod shell;
pub mod tools;

pub use address::{InputKind, NavigationTarget, ResolveMode};
pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, Navigator};
pub use error::{Result, ShellError};
pub use handoff::{ExternalHandler, HandoffOutcome, LogNotifier, Notifier, SystemOpener};
pub use home::{DEFAULT_HOME_URL, FileHomeStore, HomeStore, MemoryHomeStore};
pub use shell::{BrowserShell, LinkDisposition, ShellOptions};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
