use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tokio::sync::mpsc;

use stock_agent_tui::api::rest::AgentClient;
use stock_agent_tui::config::Config;
use stock_agent_tui::event::AppEvent;
use stock_agent_tui::input::{parse_main_command, parse_ticker_edit, TickerEdit, UiCommand};
use stock_agent_tui::ui::{self, AppState, TICKER_MAX_LEN};

#[derive(Debug, Clone, Copy)]
enum CallKind {
    Predict,
    Retrain,
}

/// Kick off a backend call on its own task. Refused while another call
/// is in flight; the completion lands on the event channel tagged with
/// the sequence number `begin_call` handed out.
fn spawn_call(
    kind: CallKind,
    app_state: &mut AppState,
    client: &Arc<AgentClient>,
    app_tx: &mpsc::Sender<AppEvent>,
) {
    if app_state.loading {
        app_state.push_log("[WARN] Request already in flight".to_string());
        return;
    }

    let ticker = app_state.normalized_ticker();
    let seq = app_state.begin_call();
    let verb = match kind {
        CallKind::Predict => "Predicting",
        CallKind::Retrain => "Retraining",
    };
    app_state.push_log(format!("{} {} (call #{})", verb, ticker, seq));

    let client = client.clone();
    let tx = app_tx.clone();
    tokio::spawn(async move {
        let outcome = match kind {
            CallKind::Predict => client.predict(&ticker).await,
            CallKind::Retrain => client.retrain(&ticker).await,
        };
        let outcome = outcome.map(Box::new).map_err(|e| e.to_string());
        let _ = tx.send(AppEvent::CallCompleted { seq, outcome }).await;
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (required by rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Init tracing (log to file so it doesn't interfere with TUI)
    let log_file = std::fs::File::create("stock-agent-tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    let api_base = config.api.effective_base_url();
    tracing::info!(
        base_url = api_base.as_deref().unwrap_or("<unconfigured>"),
        mode = ?config.api.mode,
        "Starting stock-agent-tui"
    );

    let (app_tx, mut app_rx) = mpsc::channel::<AppEvent>(64);
    let client = Arc::new(AgentClient::new(api_base.clone()));

    // Startup health probe, reported to the status bar. Never fatal.
    let health_client = client.clone();
    let health_tx = app_tx.clone();
    tokio::spawn(async move {
        let event = match health_client.health().await {
            Ok(h) => {
                tracing::info!(status = %h.status, model_ready = h.model_ready, "Backend health OK");
                AppEvent::HealthChecked {
                    healthy: true,
                    detail: format!("Backend {} (model ready: {})", h.status, h.model_ready),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Backend health check failed");
                AppEvent::HealthChecked {
                    healthy: false,
                    detail: format!("[WARN] Health check failed: {}", e),
                }
            }
        };
        let _ = health_tx.send(event).await;
    });

    // TUI main loop
    let mut terminal = ratatui::init();
    let mut app_state = AppState::new(&config.ui.default_ticker, api_base);
    app_state.push_log(format!(
        "stock-agent-tui started | {}",
        app_state.api_base.as_deref().unwrap_or("api unconfigured")
    ));

    loop {
        // Draw
        terminal.draw(|frame| ui::render(frame, &app_state))?;

        // Handle input (non-blocking with timeout)
        if crossterm::event::poll(Duration::from_millis(config.ui.refresh_rate_ms))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if app_state.editing {
                    if let Some(edit) = parse_ticker_edit(&key.code) {
                        match edit {
                            TickerEdit::Append(c) => {
                                if app_state.ticker_input.len() < TICKER_MAX_LEN {
                                    app_state.ticker_input.push(c);
                                }
                            }
                            TickerEdit::Backspace => {
                                app_state.ticker_input.pop();
                            }
                            TickerEdit::Commit => {
                                app_state.editing = false;
                                spawn_call(CallKind::Predict, &mut app_state, &client, &app_tx);
                            }
                            TickerEdit::Cancel => {
                                app_state.editing = false;
                            }
                        }
                    }
                } else if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    tracing::info!("User quit");
                    break;
                } else if let Some(cmd) = parse_main_command(&key.code) {
                    match cmd {
                        UiCommand::Predict => {
                            spawn_call(CallKind::Predict, &mut app_state, &client, &app_tx);
                        }
                        UiCommand::Retrain => {
                            spawn_call(CallKind::Retrain, &mut app_state, &client, &app_tx);
                        }
                        UiCommand::EditTicker => {
                            app_state.editing = true;
                        }
                    }
                }
            }
        }

        // Drain events from channel
        while let Ok(evt) = app_rx.try_recv() {
            app_state.apply(evt);
        }
    }

    ratatui::restore();
    tracing::info!("Shutdown complete");
    println!("Goodbye! Check stock-agent-tui.log for details.");
    Ok(())
}
