use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use roku_term::application::cli;
use roku_term::application::cli::Cli;
use roku_term::application::cli::Commands;
use roku_term::application::repl;
use roku_term::application::ui;
use roku_term::configuration::Config;
use roku_term::configuration::ConfigKey;
use roku_term::domain::models::BindingTable;
use roku_term::domain::services::ActionsService;
use roku_term::domain::services::AppStateProps;
use roku_term::infrastructure::clients::DeviceClientManager;
use roku_term::infrastructure::setup;

fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        roku_term::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = Cli::parse();

    let mut config_file = cli_args.config_file.clone();
    if config_file.is_empty() {
        config_file = Config::default(ConfigKey::ConfigFile);
    }
    let config_path = PathBuf::from(&config_file);

    if let Some(Commands::Setup) = cli_args.command {
        return setup::first_run(&config_path).await;
    }

    if !config_path.exists() {
        setup::first_run(&config_path).await?;
    }

    Config::load(
        &config_file,
        &[
            (ConfigKey::DeviceAddress, cli_args.address.clone()),
            (ConfigKey::LogLevel, cli_args.log_level.clone()),
        ],
    )
    .await?;

    let _log_guard = cli::init_logging()?;

    let timeout = Duration::from_millis(Config::get(ConfigKey::DeviceTimeoutMs).parse::<u64>()?);
    let device_client = DeviceClientManager::get(&Config::get(ConfigKey::DeviceAddress), timeout);

    if let Some(Commands::Repl) = cli_args.command {
        return repl::start(device_client).await;
    }

    let overrides = Config::load_keymap(&config_file).await?;
    let bindings = BindingTable::with_overrides(&overrides);
    for warning in bindings.warnings() {
        tracing::warn!(warning = %warning, "keymap merge");
    }

    setup_panic_hook();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        if let Err(err) = ActionsService::start(device_client, event_tx, &mut action_rx).await {
            tracing::error!(error = ?err, "actions worker stopped");
        }
    });

    return ui::start(AppStateProps { bindings }, action_tx, event_rx).await;
}
