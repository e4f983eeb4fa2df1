use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::api::types::{PredictionResult, ValidationMetrics};
use crate::format::{format_count, format_percent, format_price, format_text, PLACEHOLDER};

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

pub struct StatusBar<'a> {
    pub ticker: &'a str,
    pub base_url: Option<&'a str>,
    pub backend_healthy: Option<bool>,
    pub loading: bool,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let backend = match self.backend_healthy {
            Some(true) => Span::styled("BACKEND OK", Style::default().fg(Color::Green)),
            Some(false) => Span::styled("BACKEND DOWN", Style::default().fg(Color::Red)),
            None => Span::styled("BACKEND ?", Style::default().fg(Color::DarkGray)),
        };
        let activity = if self.loading {
            Span::styled(
                " LOADING ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" READY ", Style::default().fg(Color::Green))
        };

        let line = Line::from(vec![
            Span::styled(
                " stock-agent-tui ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.ticker, Style::default().fg(Color::Cyan)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.base_url.unwrap_or("api unconfigured"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            backend,
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            activity,
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

pub struct ControlsPanel<'a> {
    pub ticker_input: &'a str,
    pub editing: bool,
    pub loading: bool,
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            label("Ticker: "),
            Span::styled(
                self.ticker_input,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ];
        if self.editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
            spans.push(label("  (Enter: predict, Esc: cancel)"));
        } else if self.loading {
            spans.push(Span::styled(
                "  Loading...",
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(label("  [p] predict  [t] retrain  [e] edit"));
        }

        let block = Block::default()
            .title(" Controls ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// One red line, blank while there is no error.
pub struct ErrorLine<'a>(pub &'a str);

impl Widget for ErrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.0.is_empty() {
            return;
        }
        let line = Line::from(Span::styled(
            format!(" {}", self.0),
            Style::default().fg(Color::Red),
        ));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

pub struct SummaryPanel<'a> {
    result: Option<&'a PredictionResult>,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(result: Option<&'a PredictionResult>) -> Self {
        Self { result }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let r = self.result;

        let decision = format_text(r.and_then(|r| r.decision.as_deref()));
        let decision_color = match decision.as_str() {
            "BUY" => Color::Green,
            "SELL" => Color::Red,
            "HOLD" => Color::Yellow,
            _ => Color::White,
        };
        let model_status = match r.and_then(|r| r.used_baseline) {
            Some(true) => "Using Baseline".to_string(),
            Some(false) => "Using Model".to_string(),
            None => PLACEHOLDER.to_string(),
        };
        let confidence = format_text(r.and_then(|r| r.confidence.as_deref())).to_uppercase();

        let lines = vec![
            Line::from(vec![
                label("Current: "),
                value(format!("${}", format_price(r.and_then(|r| r.current_price)))),
                label("   Predicted: "),
                value(format!("${}", format_price(r.and_then(|r| r.predicted_price)))),
                label("   Model Estimate: "),
                value(format!("${}", format_price(r.and_then(|r| r.model_price)))),
            ]),
            Line::from(vec![
                label("Decision: "),
                Span::styled(
                    decision,
                    Style::default().fg(decision_color).add_modifier(Modifier::BOLD),
                ),
                label("   Status: "),
                value(model_status),
                label("   Confidence: "),
                value(confidence),
            ]),
            Line::from(vec![
                label("Return: "),
                value(format_percent(r.and_then(|r| r.predicted_return))),
                label("   Volatility: "),
                value(format_price(r.and_then(|r| r.recent_volatility))),
                label("   Retrained: "),
                value(match r.and_then(|r| r.model_trained) {
                    Some(true) => "yes".to_string(),
                    Some(false) => "no".to_string(),
                    None => PLACEHOLDER.to_string(),
                }),
            ]),
        ];

        let block = Block::default()
            .title(" Prediction ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct MetricsPanel<'a> {
    metrics: Option<&'a ValidationMetrics>,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(metrics: Option<&'a ValidationMetrics>) -> Self {
        Self { metrics }
    }
}

impl Widget for MetricsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.metrics;
        let lines = vec![
            Line::from(vec![
                label("MAE: "),
                value(format_price(m.and_then(|m| m.mae))),
                label("   Baseline MAE: "),
                value(format_price(m.and_then(|m| m.baseline_mae))),
            ]),
            Line::from(vec![
                label("RMSE: "),
                value(format_price(m.and_then(|m| m.rmse))),
                label("   R2: "),
                value(format_price(m.and_then(|m| m.r2))),
                label("   Quality: "),
                value(format_price(m.and_then(|m| m.quality_ratio))),
            ]),
        ];

        let block = Block::default()
            .title(" Validation Metrics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct ProvenancePanel<'a> {
    result: Option<&'a PredictionResult>,
}

impl<'a> ProvenancePanel<'a> {
    pub fn new(result: Option<&'a PredictionResult>) -> Self {
        Self { result }
    }
}

impl Widget for ProvenancePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let r = self.result;
        let range = match r {
            Some(r) => format!(
                "{} → {}",
                format_text(r.data_start.as_deref()),
                format_text(r.data_end.as_deref())
            ),
            None => PLACEHOLDER.to_string(),
        };
        let horizon = match r.and_then(|r| r.target_horizon_days) {
            Some(days) => format!("{} day(s)", days),
            None => PLACEHOLDER.to_string(),
        };

        let lines = vec![
            Line::from(vec![
                label("Source: "),
                value(format_text(r.and_then(|r| r.data_source.as_deref()))),
                label("   Period: "),
                value(format_text(r.and_then(|r| r.data_period.as_deref()))),
                label("   Rows: "),
                value(format_count(r.and_then(|r| r.data_rows))),
            ]),
            Line::from(vec![
                label("Range: "),
                value(range),
                label("   Trained At: "),
                value(format_text(r.and_then(|r| r.trained_at.as_deref()))),
                label("   Horizon: "),
                value(horizon),
            ]),
        ];

        let block = Block::default()
            .title(" Data Provenance ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct LogPanel<'a> {
    messages: &'a [String],
}

impl<'a> LogPanel<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let visible = inner.height as usize;
        let start = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|msg| {
                let color = if msg.starts_with("[ERR]") {
                    Color::Red
                } else if msg.starts_with("[WARN]") {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                Line::from(Span::styled(msg.as_str(), Style::default().fg(color)))
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" [P]", Style::default().fg(Color::Yellow)),
            Span::styled("redict  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[T]", Style::default().fg(Color::Yellow)),
            Span::styled("rain  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[E]", Style::default().fg(Color::Yellow)),
            Span::styled("dit ticker  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::styled("uit  ", Style::default().fg(Color::DarkGray)),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
