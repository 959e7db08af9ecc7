//! Page rendering and history
//!
//! - [`Navigator`]: the interface the shell drives
//! - [`BrowserSession`]: a Navigator backed by Chrome/Chromium over the DevTools protocol
//! - [`LaunchOptions`] / [`ConnectionOptions`]: how that browser is started or reached

pub mod config;
pub mod navigator;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use navigator::Navigator;
pub use session::BrowserSession;
