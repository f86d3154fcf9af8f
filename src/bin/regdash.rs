//! regdash - Terminal admin dashboard for event registrations.
//!
//! Usage:
//!   regdash                                   # built-in sample data
//!   regdash --url http://localhost:5000       # live registration store
//!   regdash --fixture ./registrations.json    # records from a JSON file
//!   regdash --url ... --print --type student  # print the filtered table
//!   regdash --url ... --check                 # call the health endpoint

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use regdash::config::{SAMPLE_LATENCY, SourceConfig};
use regdash::logging::{LogTarget, init_logging};
use regdash::provider::{ConnectionError, HttpSource};
use regdash::tui::{App, AppOptions};
use regdash::view::registrations::build_registrations_view;
use regdash::view::{Column, SortOrder, TypeFilter, ViewState, project};

/// UI refresh interval; also bounds how late a toast disappears.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal admin dashboard for event registrations.
#[derive(Parser)]
#[command(name = "regdash", version, about = "Registration admin dashboard")]
struct Args {
    /// Base URL of the registration store. Without it, sample data is shown.
    #[arg(long, env = "REGDASH_URL", value_name = "URL")]
    url: Option<String>,

    /// Collection endpoint, e.g. /api/admin/registrations.
    #[arg(long, env = "REGDASH_ENDPOINT", value_name = "PATH")]
    endpoint: Option<String>,

    /// Load records from a JSON file instead of the store.
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    fixture: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, env = "REGDASH_TIMEOUT", default_value_t = 10, value_name = "SECS")]
    timeout: u64,

    /// Initial search (name or email, case-insensitive).
    #[arg(long, default_value = "")]
    search: String,

    /// Initial type filter: all, student or professional.
    #[arg(long = "type", default_value = "all", value_name = "TYPE")]
    type_filter: TypeFilter,

    /// Initial sort order: newest or oldest.
    #[arg(long, default_value = "newest", value_name = "ORDER")]
    sort: SortOrder,

    /// Columns to hide: phone, company, date.
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    hide: Vec<Column>,

    /// Fetch once, print the table and exit.
    #[arg(long)]
    print: bool,

    /// With --print, write the projected view as JSON.
    #[arg(long, requires = "print")]
    json: bool,

    /// Check that the store is reachable and exit.
    #[arg(long, conflicts_with = "print")]
    check: bool,

    /// Header title.
    #[arg(long, default_value = "Registrations Admin")]
    title: String,

    /// Write logs to this file (interactive mode logs nowhere by default).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn view_state(&self) -> ViewState {
        let mut view = ViewState {
            search: self.search.clone(),
            type_filter: self.type_filter,
            sort_order: self.sort,
            ..ViewState::default()
        };
        for column in &self.hide {
            view.columns.set(*column, false);
        }
        view
    }

    fn source_config(&self) -> SourceConfig {
        SourceConfig::resolve(
            self.url.clone(),
            self.endpoint.clone(),
            self.fixture.clone(),
            Duration::from_secs(self.timeout),
        )
    }

    fn interactive(&self) -> bool {
        !self.print && !self.check
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let target = match (&args.log_file, args.interactive()) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    };
    if let Err(e) = init_logging(target, args.verbose, args.quiet) {
        eprintln!("Error: cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let result = if args.check {
        run_check(&args)
    } else if args.print {
        run_print(&args)
    } else {
        return run_tui(&args);
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_tui(args: &Args) -> ExitCode {
    let config = args.source_config().with_sample_latency(SAMPLE_LATENCY);
    info!(?config, "starting dashboard");
    let options = AppOptions {
        title: args.title.clone(),
        view: args.view_state(),
    };
    let app = App::new(Arc::from(config.build()), options);

    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_print(args: &Args) -> Result<(), ConnectionError> {
    let source = args.source_config().build();
    let report = source.fetch_all()?;
    if !report.rejected.is_empty() {
        warn!(
            count = report.rejected.len(),
            source = %source.describe(),
            "some records were rejected"
        );
    }

    let state = args.view_state();
    let view = project(&report.records, &state);
    if args.json {
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| ConnectionError::Payload(e.to_string()))?;
        println!("{}", json);
    } else {
        println!(
            "Total: {}  Students: {}  Professionals: {}",
            view.stats.total, view.stats.students, view.stats.professionals
        );
        print!("{}", build_registrations_view(&view, &state).to_text());
    }
    Ok(())
}

fn run_check(args: &Args) -> Result<(), ConnectionError> {
    match args.source_config() {
        SourceConfig::Http {
            url,
            endpoint,
            timeout,
        } => {
            let source = HttpSource::new(url)
                .with_endpoint(endpoint)
                .with_timeout(timeout);
            let body = source.check_health()?;
            println!("{}: {}", source.registrations_url(), body.trim());
        }
        config => {
            let source = config.build();
            let report = source.fetch_all()?;
            println!(
                "{}: {} records, {} rejected",
                source.describe(),
                report.records.len(),
                report.rejected.len()
            );
        }
    }
    Ok(())
}
