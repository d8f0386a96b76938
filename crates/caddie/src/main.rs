mod bootstrap;

use anyhow::Result;
use caddie_core::settings::Settings;
use caddie_data::session::open_session;
use caddie_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("caddie v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let data_path = match settings.data.clone().or_else(bootstrap::discover_data_path) {
        Some(path) => path,
        None => {
            eprintln!("No launch-monitor export found.");
            eprintln!("Pass one with --data <file.csv>, or place golfdata.csv in the current directory.");
            std::process::exit(2);
        }
    };

    // Ingestion errors are expected user-facing outcomes (wrong file, stale
    // export format): report them and exit cleanly rather than unwinding.
    let session = match open_session(&data_path) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("Ingestion failed: {err}");
            eprintln!("Could not load {}: {}", data_path.display(), err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded {} shots across {} clubs from {} ({} summary rows skipped)",
        session.metadata().rows_ingested,
        session.metadata().clubs_found,
        session.source_name(),
        session.metadata().summary_rows_skipped,
    );

    let app = App::new(
        &settings.theme,
        ViewMode::from_name(&settings.view),
        session,
        settings.initial_filter(),
    );
    app.run()?;

    Ok(())
}
