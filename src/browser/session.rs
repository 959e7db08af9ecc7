use crate::{browser::{config::{ConnectionOptions, LaunchOptions},
                      navigator::Navigator},
            error::{ShellError, Result}};
use headless_chrome::{Browser, Tab, protocol::cdp::Page};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Browser session that renders pages in a single Chrome/Chromium tab
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Tab all navigation happens in
    tab: Arc<Tab>,

    /// History index of the first page this session loaded; earlier entries
    /// (the tab's initial `about:blank`, or pages from before a `connect`) are not reachable by going back
    first_index: Option<u32>,
}

/// Drains the queue filled by `intercept_links.js`
const TAKE_LINKS_JS: &str = r#"
    (function() {
        var links = window.__browserShellLinks || [];
        if (links.length) {
            window.__browserShellLinks = [];
        }
        return JSON.stringify(links);
    })()
"#;

/// Whether a history entry exists between the first loaded page and the current one
fn has_earlier_entry(current_index: u32, first_index: Option<u32>) -> bool {
    match first_index {
        Some(first) => current_index > first,
        None => false,
    }
}

/// Parse the JSON array of intercepted link URLs returned by [`TAKE_LINKS_JS`]
fn parse_link_queue(value: Option<serde_json::Value>) -> Result<Vec<String>> {
    match value {
        Some(serde_json::Value::String(json)) => Ok(serde_json::from_str(&json)?),
        Some(serde_json::Value::Null) | None => Ok(Vec::new()),
        Some(other) => Ok(serde_json::from_value(other)?),
    }
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Hide the automation banner in headed mode
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // An interactive shell can sit idle far longer than the 30 second default
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser = Browser::new(launch_opts).map_err(|e| ShellError::LaunchFailed(e.to_string()))?;

        let tab = browser.new_tab().map_err(|e| ShellError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::info!("Launched browser (headless: {})", options.headless);
        Ok(Self { browser, tab, first_index: None })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect_with_timeout(options.ws_url.clone(), Duration::from_millis(options.timeout))
            .map_err(|e| ShellError::ConnectionFailed(e.to_string()))?;

        let existing = browser
            .get_tabs()
            .lock()
            .map_err(|e| ShellError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .first()
            .cloned();

        let tab = match existing {
            Some(tab) => tab,
            None => browser
                .new_tab()
                .map_err(|e| ShellError::TabOperationFailed(format!("Failed to create tab: {}", e)))?,
        };

        log::info!("Connected to browser at {}", options.ws_url);
        Ok(Self { browser, tab, first_index: None })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the tab pages are rendered in
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate the tab to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ShellError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| ShellError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    fn navigation_history(&self) -> Result<Page::GetNavigationHistoryReturnObject> {
        self.tab
            .call_method(Page::GetNavigationHistory(None))
            .map_err(|e| ShellError::TabOperationFailed(format!("Failed to read history: {}", e)))
    }

    /// Install the click hook that queues non-web links; safe to run repeatedly on the same document
    fn install_link_interceptor(&self) {
        if let Err(e) = self.tab.evaluate(include_str!("intercept_links.js"), false) {
            log::debug!("Failed to install link interceptor: {}", e);
        }
    }
}

impl Navigator for BrowserSession {
    fn load(&mut self, url: &str) -> Result<()> {
        self.navigate(url)?;
        self.wait_for_navigation()?;

        if self.first_index.is_none() {
            let first = self.navigation_history()?.current_index;
            log::debug!("First page is history entry {}", first);
            self.first_index = Some(first);
        }

        self.install_link_interceptor();
        Ok(())
    }

    fn can_go_back(&self) -> Result<bool> {
        Ok(has_earlier_entry(self.navigation_history()?.current_index, self.first_index))
    }

    fn go_back(&mut self) -> Result<()> {
        let history = self.navigation_history()?;
        let current = history.current_index as usize;

        let previous = current
            .checked_sub(1)
            .and_then(|index| history.entries.get(index))
            .ok_or_else(|| ShellError::NavigationFailed("No previous history entry".to_string()))?;

        log::debug!("Going back to {}", previous.url);
        self.tab
            .call_method(Page::NavigateToHistoryEntry { entry_id: previous.id })
            .map_err(|e| ShellError::NavigationFailed(format!("Failed to go back: {}", e)))?;

        if let Err(e) = self.wait_for_navigation() {
            log::debug!("Back navigation did not settle: {}", e);
        }

        self.install_link_interceptor();
        Ok(())
    }

    fn current_url(&self) -> Option<String> {
        let url = self.tab.get_url();
        if url.is_empty() || url == "about:blank" {
            None
        } else {
            Some(url)
        }
    }

    fn take_intercepted_links(&mut self) -> Result<Vec<String>> {
        let result = self
            .tab
            .evaluate(TAKE_LINKS_JS, false)
            .map_err(|e| ShellError::TabOperationFailed(format!("Failed to read intercepted links: {}", e)))?;

        // Pages reached by clicking a web link were never passed through `load`
        self.install_link_interceptor();
        parse_link_queue(result.value)
    }
}
