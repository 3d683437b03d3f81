use super::render::{print_messages, render_document};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};
use tally::app::{App, Event, Mode};
use tally::config::TallyConfig;
use tally::error::{Result, TallyError};
use tally::model::{FormInput, RecordId};
use tally::store::fs_backend::FsBackend;
use tally::store::SlotStore;
use tally::view::{Document, ViewRenderer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "TALLY_HOME";

type CliApp = App<FsBackend, Document>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command.unwrap_or(Commands::List) {
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        command => run_session(&data_dir, command),
    }
}

/// Starts the app against `data_dir` and replays one command as events.
fn run_session(data_dir: &Path, command: Commands) -> Result<()> {
    let mut app = init_app(data_dir)?;
    match command {
        Commands::List => handle_list(&app),
        Commands::Add { name, quantity } => handle_add(&mut app, name, quantity),
        Commands::Edit { id, name, quantity } => handle_edit(&mut app, id, name, quantity),
        Commands::Delete { id } => handle_delete(&mut app, id),
        Commands::Clear => handle_clear(&mut app),
        Commands::Total => handle_total(&app),
        Commands::Shell => shell::run(&mut app, io::stdin().lock(), &mut io::stdout().lock()),
        Commands::Config { key, value } => handle_config(data_dir, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "tally=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tally", "tally")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TallyError::Api("Could not determine a data directory".to_string()))
}

fn init_app(data_dir: &Path) -> Result<CliApp> {
    let config = TallyConfig::load(data_dir)?;
    let slots = SlotStore::with_key(FsBackend::new(data_dir.to_path_buf()), &config.slot_key)?;
    let view = ViewRenderer::new(Document::new()).with_unit(config.unit);
    App::start(slots, view)
}

fn paint(app: &CliApp) {
    print!("{}", render_document(app.view().surface()));
}

fn handle_list(app: &CliApp) -> Result<()> {
    paint(app);
    Ok(())
}

fn handle_add(app: &mut CliApp, name: String, quantity: String) -> Result<()> {
    app.view_mut()
        .write_form(&FormInput::new(name, quantity))?;
    let result = app.handle(Event::SubmitNew)?;
    print_messages(&result.messages);
    paint(app);
    Ok(())
}

/// Clicks the row for `id` and checks that it actually entered edit mode.
fn select_row(app: &mut CliApp, id: u64) -> Result<()> {
    let id = RecordId(id);
    app.handle(Event::edit(id))?;
    if app.mode() != Mode::Editing(id) {
        return Err(TallyError::Api(format!("No entry with id {}", id)));
    }
    Ok(())
}

fn handle_edit(app: &mut CliApp, id: u64, name: String, quantity: String) -> Result<()> {
    select_row(app, id)?;
    app.view_mut()
        .write_form(&FormInput::new(name, quantity))?;
    let result = app.handle(Event::SubmitEdit)?;
    print_messages(&result.messages);
    paint(app);
    Ok(())
}

fn handle_delete(app: &mut CliApp, id: u64) -> Result<()> {
    select_row(app, id)?;
    let result = app.handle(Event::Delete)?;
    print_messages(&result.messages);
    paint(app);
    Ok(())
}

fn handle_clear(app: &mut CliApp) -> Result<()> {
    let result = app.handle(Event::ClearAll)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_total(app: &CliApp) -> Result<()> {
    println!("{}", app.total());
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TallyConfig::load(data_dir)?;
    let unit_display = |config: &TallyConfig| config.unit.clone().unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("slot-key = {}", config.slot_key);
            println!("unit = {}", unit_display(&config));
        }
        (Some("slot-key"), None) => println!("{}", config.slot_key),
        (Some("unit"), None) => println!("{}", unit_display(&config)),
        (Some("slot-key"), Some(v)) => {
            config.set_slot_key(&v)?;
            config.save(data_dir)?;
            println!("slot-key = {}", config.slot_key);
        }
        (Some("unit"), Some(v)) => {
            config.set_unit(&v);
            config.save(data_dir)?;
            println!("unit = {}", unit_display(&config));
        }
        (Some(other), _) => {
            return Err(TallyError::Api(format!("Unknown config key: {}", other)));
        }
    }
    Ok(())
}
