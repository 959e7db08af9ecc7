//! Browser shell
//!
//! Interactive host for the shell: each line read from stdin is either address-bar
//! input or a `:command`. Pages are rendered in a Chrome/Chromium instance.

use anyhow::Context;
use browser_shell::{BrowserSession, BrowserShell, ConnectionOptions, FileHomeStore, LaunchOptions, MemoryHomeStore,
                    Notifier, ShellOptions, SystemOpener,
                    tools::{ToolContext, ToolRegistry, ToolResult}};
use clap::Parser;
use serde_json::{Value, json};
use std::{io::{self, BufRead, Write},
          path::PathBuf};

#[derive(Parser)]
#[command(name = "browser-shell")]
#[command(version)]
#[command(about = "Minimal browser shell with search fallback and a persisted home page", long_about = None)]
struct Cli {
    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// WebSocket endpoint URL of an already running browser
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH", value_parser = parse_window_size)]
    window_size: Option<(u32, u32)>,

    /// Preferences file holding the home page (default: per-user data directory)
    #[arg(long, value_name = "FILE")]
    home_file: Option<PathBuf>,

    /// Treat every input as an address instead of searching for free text
    #[arg(long)]
    no_search: bool,
}

fn parse_window_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value.split_once('x').ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width = width.parse().map_err(|e| format!("invalid width: {}", e))?;
    let height = height.parse().map_err(|e| format!("invalid height: {}", e))?;
    Ok((width, height))
}

/// Prints notifications to stderr, standing in for a toast
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

enum Command<'a> {
    Tool(&'static str, Value),
    ListTools,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let Some(command) = line.strip_prefix(':') else {
        return Command::Tool("load", json!({ "input": line }));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "back" | "b" => Command::Tool("back", json!({})),
        "home" => Command::Tool("home", json!({})),
        "sethome" | "set_home" => Command::Tool("set_home", json!({})),
        "open" => Command::Tool("open_link", json!({ "url": arg })),
        "tools" => Command::ListTools,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    }
}

fn print_result(result: &ToolResult) {
    if result.success {
        if let Some(url) = result.data.as_ref().and_then(|data| data.get("url")).and_then(Value::as_str) {
            println!("{}", url);
        }
    } else if let Some(error) = &result.error {
        eprintln!("! {}", error);
    }
}

fn print_help() {
    println!("Type a URL or search terms and press enter to load it.");
    println!();
    println!("COMMANDS:");
    println!("    :back, :b        Go back one page");
    println!("    :home            Load the home page");
    println!("    :sethome         Save the current page as the home page");
    println!("    :open <url>      Follow a link (non-web schemes open in other apps)");
    println!("    :tools           List tools and their parameter schemas");
    println!("    :quit, :q        Exit");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let session = match cli.ws_endpoint {
        Some(ref endpoint) => {
            eprintln!("Connecting to {}", endpoint);
            BrowserSession::connect(ConnectionOptions::new(endpoint.clone()))
        }
        None => {
            let mut options = LaunchOptions::new().headless(!cli.headed);
            if let Some((width, height)) = cli.window_size {
                options = options.window_size(width, height);
            }
            if let Some(ref path) = cli.executable_path {
                options = options.chrome_path(path.clone());
            }
            if let Some(ref dir) = cli.user_data_dir {
                options = options.user_data_dir(dir.clone());
            }
            eprintln!("Browser mode: {}", if options.headless { "headless" } else { "headed" });
            BrowserSession::launch(options)
        }
    }
    .context("Failed to start browser")?;

    let shell = BrowserShell::new(session)
        .with_external_handler(SystemOpener::new())
        .with_notifier(StderrNotifier)
        .with_options(ShellOptions::new().search_fallback(!cli.no_search));

    let mut shell = match cli.home_file.map(FileHomeStore::new).or_else(FileHomeStore::default_location) {
        Some(store) => {
            log::debug!("Home page preferences: {}", store.path().display());
            shell.with_home_store(store)
        }
        None => {
            log::warn!("No data directory available, home page will not persist");
            shell.with_home_store(MemoryHomeStore::new())
        }
    };

    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::new(&mut shell);

    match registry.execute("home", json!({}), &mut context) {
        Ok(result) => print_result(&result),
        Err(e) => eprintln!("! {}", e),
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        // Links clicked in the page since the last prompt
        if let Err(e) = context.shell.handle_intercepted_links() {
            log::debug!("Failed to collect clicked links: {}", e);
        }

        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(line.trim()) {
            Command::Tool(name, params) => match registry.execute(name, params, &mut context) {
                Ok(result) => print_result(&result),
                Err(e) => eprintln!("! {}", e),
            },
            Command::ListTools => {
                for name in registry.names() {
                    let schema = registry.schema(name).unwrap_or_default();
                    println!("{}: {}", name, serde_json::to_string(&schema)?);
                }
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(name) => eprintln!("! Unknown command ':{}', try :help", name),
        }
    }

    Ok(())
}
