use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use field_builder::app::App;
use field_builder::form::FormController;
use field_builder::util::log::init_log_dir;
use field_builder::{AppConfig, FileDraftStore, MockFieldService, log_info};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    init_log_dir(&config.log_dir);
    init_tracing(Path::new(&config.log_dir))?;
    let service = Arc::new(MockFieldService::from_config(&config)?);
    let store = FileDraftStore::new(&config.draft_path);
    log_info!("Starting field builder, saving to {}", service.endpoint());
    log_info!("Keeping drafts in {}", store.path().display());
    let controller = FormController::mount(service, store)?;

    let terminal = ratatui::init();
    let result = App::new(controller).run(terminal).await;
    ratatui::restore();
    result
}

/// tracing output goes to a file; stdout belongs to the terminal UI
fn init_tracing(log_dir: &Path) -> color_eyre::Result<()> {
    create_dir_all(log_dir)?;
    let file = File::create(log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
