//! RemoteID Web CLI Application
//!
//! Command-line front end for the remoteid-web library. It talks to a
//! device's web interface over HTTP and adds:
//! - One-shot text and binary fetches
//! - JSON polling into an in-memory page, printed after every fill
//! - TOML configuration for device URL, poll timing and page elements

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use remoteid_web::{
    ajax_get_callback, ajax_get_callback_binary, ajax_json_poll, CancellationToken, Document,
    HttpTransport, PageController, ThreadTimer,
};
use std::fs;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, FillMode};

/// RemoteID Web - Query and watch a RemoteID device's web interface
#[derive(Parser, Debug)]
#[command(name = "remoteid-web-cli")]
#[command(about = "Query and watch a RemoteID device's web interface", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a URL once and print the response text
    Get {
        url: String,
    },

    /// Fetch a URL once as binary data
    GetBinary {
        url: String,

        /// Write the payload to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Poll a JSON endpoint and fill a page from it
    Poll {
        /// Status URL (default: from config, then the device default)
        url: Option<String>,

        /// Path to configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Page element id (can be repeated)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,

        /// Write JSON as inner markup or as form values
        #[arg(long, value_enum)]
        fill: Option<FillMode>,

        /// Delay between polls in milliseconds
        #[arg(long, value_name = "MS")]
        refresh_ms: Option<u64>,

        /// Request timeout in milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        /// Stop after this many loaded responses
        #[arg(long, value_name = "COUNT")]
        max_polls: Option<u64>,
    },

    /// List known board codes
    Boards {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("RemoteID Web CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using remoteid-web library v{}", remoteid_web::VERSION);

    match args.command {
        Command::Get { url } => get_mode(&url),
        Command::GetBinary { url, output } => get_binary_mode(&url, output),
        Command::Poll {
            url,
            config: config_path,
            ids,
            fill,
            refresh_ms,
            timeout_ms,
            max_polls,
        } => {
            let mut app = match &config_path {
                Some(path) => {
                    log::info!("Loading configuration from: {:?}", path);
                    config::load_config(path)?
                }
                None => AppConfig::default(),
            };

            // Command-line flags override the config file
            if let Some(url) = url {
                app.device.url = url;
            }
            app.page.elements.extend(ids);
            if let Some(fill) = fill {
                app.page.fill = fill;
            }
            if let Some(ms) = refresh_ms {
                app.poll.refresh_ms = ms;
            }
            if let Some(ms) = timeout_ms {
                app.poll.timeout_ms = ms;
            }
            if max_polls.is_some() {
                app.poll.max_polls = max_polls;
            }

            poll_mode(&app)
        }
        Command::Boards { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(remoteid_web::BOARDS)?);
            } else {
                print!("{}", report::render_boards());
            }
            Ok(())
        }
    }
}

/// Single text fetch
fn get_mode(url: &str) -> Result<()> {
    let transport = HttpTransport::new()?;
    let text = ajax_get_callback(&transport, url, str::to_string)
        .with_context(|| format!("GET {} failed", url))?;
    println!("{}", text);
    Ok(())
}

/// Single binary fetch
fn get_binary_mode(url: &str, output: Option<PathBuf>) -> Result<()> {
    let transport = HttpTransport::new()?;
    let bytes = ajax_get_callback_binary(&transport, url, <[u8]>::to_vec)
        .with_context(|| format!("GET {} failed", url))?;

    match output {
        Some(path) => {
            fs::write(&path, &bytes).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Wrote {} bytes to {:?}", bytes.len(), path);
        }
        None => println!("{} bytes", bytes.len()),
    }
    Ok(())
}

/// Poll a JSON endpoint into an in-memory page
fn poll_mode(app: &AppConfig) -> Result<()> {
    if app.page.elements.is_empty() {
        bail!("No page elements configured; pass --id or set [page] elements");
    }
    app.poll.validate()?;

    let transport = HttpTransport::new()?;
    let page = Document::with_elements(app.page.elements.iter().cloned());
    let mut controller = PageController::new(page);
    let mode = app.page.fill;

    println!("Polling {} every {} ms", app.device.url, app.poll.refresh_ms);

    let stats = ajax_json_poll(
        &transport,
        &app.device.url,
        |json| {
            let filled = match mode {
                FillMode::Html => controller.fill_json_html(json),
                FillMode::Value => controller.fill_json_value(json),
            };
            println!(
                "\n[{}] {} element(s) updated",
                chrono::Local::now().format("%H:%M:%S"),
                filled
            );
            print!("{}", report::render_snapshot(controller.page(), mode));
            true
        },
        &app.poll,
        &mut ThreadTimer,
        &CancellationToken::new(),
    )?;

    log::info!(
        "Polling finished: {} requests, {} loads, {} errors, {} timeouts",
        stats.requests,
        stats.loads,
        stats.network_errors,
        stats.timeouts
    );
    Ok(())
}

/// Map `-v` / `-q` flags to a log level; `-q` wins over `-v`
fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    use log::LevelFilter;

    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Route `log` records to stderr as `HH:MM:SS LEVEL target: message`
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
