//! The browser shell: address bar, load, back, home page and link interception
//!
//! [`BrowserShell`] owns its collaborators as trait objects supplied by the
//! host. The host's event loop calls into it; the shell never blocks on
//! anything other than the navigator.

use crate::{address::{self, NavigationTarget, ResolveMode},
            browser::Navigator,
            error::Result,
            handoff::{ExternalHandler, HandoffOutcome, LogNotifier, Notifier, SystemOpener},
            home::{DEFAULT_HOME_URL, HomeStore, MemoryHomeStore}};

/// Behavior switches for [`BrowserShell`]
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Send non-address input to the search engine instead of treating it as a host name
    pub search_fallback: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { search_fallback: true }
    }
}

impl ShellOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_fallback(mut self, enabled: bool) -> Self {
        self.search_fallback = enabled;
        self
    }

    fn resolve_mode(&self) -> ResolveMode {
        if self.search_fallback {
            ResolveMode::Classify
        } else {
            ResolveMode::AlwaysUrl
        }
    }
}

/// What the shell did with an intercepted link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// The link was a web URL and the navigator loaded it
    Navigated(NavigationTarget),
    /// The link was given to the operating system
    HandedOff(HandoffOutcome),
}

/// Single-page browser shell
pub struct BrowserShell {
    navigator: Box<dyn Navigator>,
    home_store: Box<dyn HomeStore>,
    external: Box<dyn ExternalHandler>,
    notifier: Box<dyn Notifier>,
    options: ShellOptions,

    /// Text currently shown in the address bar
    address: String,
}

impl BrowserShell {
    /// Create a shell with an in-memory home store, the system opener and log notifications
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self {
            navigator: Box::new(navigator),
            home_store: Box::new(MemoryHomeStore::new()),
            external: Box::new(SystemOpener::new()),
            notifier: Box::new(LogNotifier),
            options: ShellOptions::default(),
            address: String::new(),
        }
    }

    pub fn with_home_store(mut self, store: impl HomeStore + 'static) -> Self {
        self.home_store = Box::new(store);
        self
    }

    pub fn with_external_handler(mut self, handler: impl ExternalHandler + 'static) -> Self {
        self.external = Box::new(handler);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_options(mut self, options: ShellOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Text currently shown in the address bar
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Load the saved home page, or the default page if none was saved.
    ///
    /// The stored value is loaded exactly as saved. A store that cannot be read
    /// is reported to the user and treated as empty.
    pub fn start(&mut self) -> Result<NavigationTarget> {
        let saved = match self.home_store.get() {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Failed to read home page: {}", e);
                self.notifier.notify(&format!("Could not read home page: {}", e));
                None
            }
        };

        let target = NavigationTarget::verbatim(saved.unwrap_or_else(|| DEFAULT_HOME_URL.to_string()));
        self.navigate(target)
    }

    /// Resolve address-bar input and load it.
    ///
    /// Blank input does nothing and returns `Ok(None)`.
    pub fn load(&mut self, raw: &str) -> Result<Option<NavigationTarget>> {
        match address::resolve_with(raw, self.options.resolve_mode()) {
            Some(target) => self.navigate(target).map(Some),
            None => {
                log::debug!("Ignoring blank input");
                Ok(None)
            }
        }
    }

    /// Step back in the navigator's history; `false` when already at the first page
    pub fn go_back(&mut self) -> Result<bool> {
        if !self.navigator.can_go_back()? {
            return Ok(false);
        }

        self.navigator.go_back()?;
        if let Some(url) = self.navigator.current_url() {
            self.address = url;
        }
        Ok(true)
    }

    /// Save the page currently displayed as the home page.
    ///
    /// Returns the saved URL, or `None` when nothing is displayed.
    pub fn set_home(&mut self) -> Result<Option<String>> {
        let Some(url) = self.navigator.current_url() else {
            log::debug!("No page displayed, home page unchanged");
            return Ok(None);
        };

        self.home_store.set(&url)?;
        log::info!("Home page set to {}", url);
        Ok(Some(url))
    }

    /// Handle a link the page asked to open.
    ///
    /// Web URLs stay in the navigator; any other scheme goes to the external
    /// handler, and a handoff that does not succeed is reported to the user.
    pub fn open_link(&mut self, url: &str) -> Result<LinkDisposition> {
        if address::has_web_scheme(url) {
            let target = self.navigate(NavigationTarget::verbatim(url))?;
            return Ok(LinkDisposition::Navigated(target));
        }

        let outcome = self.external.open(url);
        if !outcome.is_handled() {
            log::warn!("Could not open {}: {}", url, outcome);
            self.notifier.notify(&format!("Error handling link: {}", url));
        }

        Ok(LinkDisposition::HandedOff(outcome))
    }

    /// Route every link the navigator intercepted since the last call through [`Self::open_link`]
    pub fn handle_intercepted_links(&mut self) -> Result<Vec<LinkDisposition>> {
        let links = self.navigator.take_intercepted_links()?;
        links.iter().map(|url| self.open_link(url)).collect()
    }

    fn navigate(&mut self, target: NavigationTarget) -> Result<NavigationTarget> {
        log::info!("Loading {}", target);
        self.navigator.load(target.as_str())?;
        self.address = target.to_string();
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct StubNavigator {
        loads: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for StubNavigator {
        fn load(&mut self, url: &str) -> Result<()> {
            self.loads.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn can_go_back(&self) -> Result<bool> {
            Ok(self.loads.borrow().len() > 1)
        }

        fn go_back(&mut self) -> Result<()> {
            self.loads.borrow_mut().pop();
            Ok(())
        }

        fn current_url(&self) -> Option<String> {
            self.loads.borrow().last().cloned()
        }

        fn take_intercepted_links(&mut self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    struct BrokenStore;

    impl HomeStore for BrokenStore {
        fn get(&self) -> Result<Option<String>> {
            Err(ShellError::InvalidArgument("unreadable".to_string()))
        }

        fn set(&mut self, _url: &str) -> Result<()> {
            Err(ShellError::InvalidArgument("read-only".to_string()))
        }
    }

    fn shell() -> (BrowserShell, Rc<RefCell<Vec<String>>>) {
        let navigator = StubNavigator::default();
        let loads = navigator.loads.clone();
        (BrowserShell::new(navigator), loads)
    }

    #[test]
    fn test_start_without_home_loads_default() {
        let (mut shell, loads) = shell();

        let target = shell.start().unwrap();
        assert_eq!(target.as_str(), DEFAULT_HOME_URL);
        assert_eq!(shell.address(), DEFAULT_HOME_URL);
        assert_eq!(*loads.borrow(), vec![DEFAULT_HOME_URL.to_string()]);
    }

    #[test]
    fn test_start_with_unreadable_store_loads_default() {
        let (shell, _) = shell();
        let mut shell = shell.with_home_store(BrokenStore);

        assert_eq!(shell.start().unwrap().as_str(), DEFAULT_HOME_URL);
    }

    #[test]
    fn test_load_blank_is_noop() {
        let (mut shell, loads) = shell();

        assert_eq!(shell.load("   ").unwrap(), None);
        assert!(loads.borrow().is_empty());
    }

    #[test]
    fn test_load_updates_address() {
        let (mut shell, _) = shell();

        shell.load("github.com").unwrap();
        assert_eq!(shell.address(), "https://github.com");
    }

    #[test]
    fn test_search_fallback_disabled() {
        let (shell, loads) = shell();
        let mut shell = shell.with_options(ShellOptions::new().search_fallback(false));

        shell.load("rust").unwrap();
        assert_eq!(*loads.borrow(), vec!["https://rust".to_string()]);
    }

    #[test]
    fn test_go_back_at_first_page() {
        let (mut shell, _) = shell();
        shell.load("example.com").unwrap();

        assert!(!shell.go_back().unwrap());
        assert_eq!(shell.address(), "https://example.com");
    }

    #[test]
    fn test_go_back_restores_address() {
        let (mut shell, _) = shell();
        shell.load("example.com").unwrap();
        shell.load("example.org").unwrap();

        assert!(shell.go_back().unwrap());
        assert_eq!(shell.address(), "https://example.com");
    }

    #[test]
    fn test_followed_web_link_updates_address() {
        let (mut shell, _) = shell();
        shell.start().unwrap();

        shell.open_link("https://example.org/page").unwrap();
        assert_eq!(shell.address(), "https://example.org/page");
    }

    #[test]
    fn test_set_home_propagates_store_errors() {
        let (shell, _) = shell();
        let mut shell = shell.with_home_store(BrokenStore);
        shell.load("example.com").unwrap();

        assert!(shell.set_home().is_err());
    }
}
