pub mod chart;
pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::api::types::PredictionResult;
use crate::event::AppEvent;

use chart::TrendChart;
use dashboard::{
    ControlsPanel, ErrorLine, KeybindBar, LogPanel, MetricsPanel, ProvenancePanel, StatusBar,
    SummaryPanel,
};

const MAX_LOG_MESSAGES: usize = 200;

pub const DEFAULT_TICKER: &str = "AAPL";
pub const TICKER_MAX_LEN: usize = 10;

pub struct AppState {
    pub ticker_input: String,
    pub editing: bool,
    pub loading: bool,
    pub error: String,
    pub result: Option<PredictionResult>,
    pub call_seq: u64,
    pub api_base: Option<String>,
    pub backend_healthy: Option<bool>,
    pub log_messages: Vec<String>,
}

impl AppState {
    pub fn new(default_ticker: &str, api_base: Option<String>) -> Self {
        Self {
            ticker_input: default_ticker.to_string(),
            editing: false,
            loading: false,
            error: String::new(),
            result: None,
            call_seq: 0,
            api_base,
            backend_healthy: None,
            log_messages: Vec::new(),
        }
    }

    /// Symbol actually sent to the backend: trimmed, upper-cased,
    /// falling back to the default when the field is blank.
    pub fn normalized_ticker(&self) -> String {
        let ticker = self.ticker_input.trim().to_ascii_uppercase();
        if ticker.is_empty() {
            DEFAULT_TICKER.to_string()
        } else {
            ticker
        }
    }

    /// Start a new call: bump the sequence tag, raise the loading
    /// flag, clear the previous error. Returns the tag the completion
    /// event must carry.
    pub fn begin_call(&mut self) -> u64 {
        self.call_seq += 1;
        self.loading = true;
        self.error.clear();
        self.call_seq
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            self.log_messages.remove(0);
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::CallCompleted { seq, outcome } => {
                if seq != self.call_seq {
                    // A newer call owns the state now.
                    tracing::debug!(seq, latest = self.call_seq, "Discarding stale completion");
                    self.push_log(format!("Discarded stale response (call #{})", seq));
                    return;
                }
                match outcome {
                    Ok(result) => {
                        self.push_log(format!(
                            "Prediction ready for {}",
                            result.ticker.as_deref().unwrap_or("?")
                        ));
                        self.result = Some(*result);
                        self.error.clear();
                    }
                    Err(message) => {
                        self.push_log(format!("[ERR] {}", message));
                        self.error = message;
                    }
                }
                self.loading = false;
            }
            AppEvent::HealthChecked { healthy, detail } => {
                self.backend_healthy = Some(healthy);
                self.push_log(detail);
            }
            AppEvent::LogMessage(msg) => {
                self.push_log(msg);
            }
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // controls
            Constraint::Length(1), // error line
            Constraint::Length(5), // prediction summary
            Constraint::Min(8),    // trend chart
            Constraint::Length(4), // validation metrics
            Constraint::Length(4), // data provenance
            Constraint::Length(5), // log
            Constraint::Length(1), // keybinds
        ])
        .split(frame.area());

    let ticker = state.normalized_ticker();

    frame.render_widget(
        StatusBar {
            ticker: &ticker,
            base_url: state.api_base.as_deref(),
            backend_healthy: state.backend_healthy,
            loading: state.loading,
        },
        outer[0],
    );

    frame.render_widget(
        ControlsPanel {
            ticker_input: &state.ticker_input,
            editing: state.editing,
            loading: state.loading,
        },
        outer[1],
    );

    frame.render_widget(ErrorLine(&state.error), outer[2]);

    frame.render_widget(SummaryPanel::new(state.result.as_ref()), outer[3]);

    let prices: &[f64] = state
        .result
        .as_ref()
        .map(|r| r.recent_close_prices.as_slice())
        .unwrap_or(&[]);
    frame.render_widget(TrendChart::new(prices, &ticker), outer[4]);

    frame.render_widget(
        MetricsPanel::new(state.result.as_ref().and_then(|r| r.metrics.as_ref())),
        outer[5],
    );

    frame.render_widget(ProvenancePanel::new(state.result.as_ref()), outer[6]);

    frame.render_widget(LogPanel::new(&state.log_messages), outer[7]);

    frame.render_widget(KeybindBar, outer[8]);
}
