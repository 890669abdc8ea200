//! Govspend dashboard driver
//!
//! Loads the spending dataset and map boundaries, prints a JSON snapshot of the
//! initial views, then reads one JSON `ViewEvent` per stdin line and prints a
//! snapshot after each. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use govspend_core::budget::{BudgetError, PopulationTable};
use govspend_core::view::{Dashboard, DerivedViews, ViewEvent, ViewSettings, ViewState};
use govspend_io::{StateCodePolicy, load_dataset, load_regions};
use govspend_shared::{AppConfig, AppError, AppResult};

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'a ViewState,
    views: &'a DerivedViews,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "govspend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            error!(
                code = app_error.map_or("INTERNAL_ERROR", AppError::error_code),
                error = %err,
                "govspend failed"
            );
            let status = app_error.map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(status).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let mut dashboard = build_dashboard(&config)?;

    dashboard.subscribe(|state: &ViewState, views: &DerivedViews| {
        info!(
            render_mode = ?state.render_mode,
            drill_down = ?state.drill_down,
            map_category = %state.map_category,
            selected_state = ?state.selected_state,
            overview_rows = views.overview.len(),
            "View updated"
        );
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let initial = dashboard.views().map_err(view_error)?;
    write_snapshot(&mut out, dashboard.state(), &initial)?;

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: ViewEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line = index + 1, error = %err, "Ignoring malformed event");
                continue;
            }
        };
        let views = dashboard.dispatch(&event).map_err(view_error)?;
        write_snapshot(&mut out, dashboard.state(), &views)?;
    }

    Ok(())
}

fn build_dashboard(config: &AppConfig) -> AppResult<Dashboard> {
    let populations = PopulationTable::default()
        .with_overrides(config.population_overrides()?)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if usize::try_from(config.view.jurisdiction_count).ok() != Some(populations.len()) {
        warn!(
            jurisdiction_count = config.view.jurisdiction_count,
            populations = populations.len(),
            "Average divisor differs from the number of jurisdictions"
        );
    }

    let dataset = load_dataset(
        Path::new(&config.dataset.path),
        StateCodePolicy::from_strict(config.dataset.strict_states),
    )?;
    if dataset.skipped() > 0 {
        warn!(skipped = dataset.skipped(), "Rows with unknown state codes were left out");
    }

    let regions = match &config.boundaries.path {
        Some(path) => load_regions(Path::new(path))?,
        None => {
            info!("No boundary file configured, map has no regions");
            Vec::new()
        }
    };

    let settings = ViewSettings {
        top_n: config.view.top_n,
        jurisdiction_count: config.view.jurisdiction_count,
    };
    info!(
        records = dataset.len(),
        regions = regions.len(),
        top_n = settings.top_n,
        "Dashboard ready"
    );

    Ok(Dashboard::new(dataset.shared_records(), populations, settings).with_regions(regions))
}

fn write_snapshot(out: &mut impl Write, state: &ViewState, views: &DerivedViews) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &Snapshot { state, views })?;
    out.write_all(b"\n")?;
    out.flush()
}

fn view_error(err: BudgetError) -> AppError {
    match err {
        BudgetError::Overflow => AppError::Validation(err.to_string()),
        _ => AppError::Internal(err.to_string()),
    }
}
