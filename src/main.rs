use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use mamae_fit::app::{App, AppMessage};
use mamae_fit::cli::{parse_args, run_cli_command, CliCommand};
use mamae_fit::client::GeneratorClient;
use mamae_fit::input::{handle_event, CommandRegistry};
use mamae_fit::server::{serve_until, shutdown_on, start_server_on};
use mamae_fit::startup::{default_log_path, init_logging, AppConfig, LogTarget};
use mamae_fit::terminal::{install_panic_hook, TerminalManager};
use mamae_fit::ui;

/// Frame tick; drives the spinners.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }

    color_eyre::install()?;
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        CliCommand::Serve => {
            init_logging(LogTarget::Stderr)?;
            runtime.block_on(serve_until(
                config.addr,
                config.seed,
                shutdown_on(tokio::signal::ctrl_c()),
            ))?;
            Ok(())
        }
        _ => {
            init_logging(LogTarget::File(default_log_path()?))?;
            install_panic_hook();
            runtime.block_on(run_tui(config))
        }
    }
}

async fn run_tui(config: AppConfig) -> Result<()> {
    let base_url = if config.uses_embedded_server() {
        let (_server, addr) = start_server_on(config.addr, config.seed).await?;
        format!("http://{}", addr)
    } else {
        config.base_url()
    };
    info!(%base_url, "using generator server");

    let api = Arc::new(GeneratorClient::new(base_url));
    let mut app = App::new(api, &config);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(ref e) = result {
        warn!("TUI exited with error: {}", e);
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(event)) => handle_event(app, &registry, event),
                    Some(Err(e)) => warn!("terminal event error: {}", e),
                    None => app.quit(),
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
