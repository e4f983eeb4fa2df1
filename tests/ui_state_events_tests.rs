use stock_agent_tui::api::types::PredictionResult;
use stock_agent_tui::event::AppEvent;
use stock_agent_tui::ui::AppState;

fn sample_result(price: f64) -> PredictionResult {
    PredictionResult {
        ticker: Some("AAPL".to_string()),
        current_price: Some(price),
        ..Default::default()
    }
}

fn completed(seq: u64, outcome: Result<PredictionResult, &str>) -> AppEvent {
    AppEvent::CallCompleted {
        seq,
        outcome: outcome.map(Box::new).map_err(str::to_string),
    }
}

#[test]
/// A successful call replaces the whole result, clears any prior
/// error, and drops the loading flag last.
fn success_replaces_result_and_clears_error() {
    let mut s = AppState::new("AAPL", None);
    s.error = "stale error".to_string();

    let seq = s.begin_call();
    assert!(s.loading);
    assert!(s.error.is_empty());

    s.apply(completed(seq, Ok(sample_result(101.5))));
    assert!(!s.loading);
    assert!(s.error.is_empty());
    assert_eq!(s.result.as_ref().unwrap().current_price, Some(101.5));
}

#[test]
/// A failed call surfaces the message but must not clobber the last
/// good result.
fn failure_keeps_prior_result() {
    let mut s = AppState::new("AAPL", None);
    let seq = s.begin_call();
    s.apply(completed(seq, Ok(sample_result(101.5))));

    let seq = s.begin_call();
    s.apply(completed(seq, Err("model unavailable")));

    assert!(!s.loading);
    assert_eq!(s.error, "model unavailable");
    assert_eq!(s.result.as_ref().unwrap().current_price, Some(101.5));
}

#[test]
/// Overlapping calls: only the completion carrying the latest sequence
/// tag may touch the state; earlier ones are discarded.
fn stale_completion_is_discarded() {
    let mut s = AppState::new("AAPL", None);
    let first = s.begin_call();
    let second = s.begin_call();

    s.apply(completed(first, Ok(sample_result(1.0))));
    assert!(s.loading, "stale completion must not end the newer call");
    assert!(s.result.is_none());

    s.apply(completed(second, Ok(sample_result(2.0))));
    assert!(!s.loading);
    assert_eq!(s.result.as_ref().unwrap().current_price, Some(2.0));
}

#[test]
/// Stale failures are discarded too, not surfaced as errors.
fn stale_failure_does_not_set_error() {
    let mut s = AppState::new("AAPL", None);
    let first = s.begin_call();
    let second = s.begin_call();

    s.apply(completed(first, Err("connection reset")));
    assert!(s.error.is_empty());

    s.apply(completed(second, Ok(sample_result(3.0))));
    assert!(s.error.is_empty());
}

#[test]
fn ticker_input_is_trimmed_uppercased_and_defaulted() {
    let mut s = AppState::new("AAPL", None);

    s.ticker_input = " aapl ".to_string();
    assert_eq!(s.normalized_ticker(), "AAPL");

    s.ticker_input = "msft".to_string();
    assert_eq!(s.normalized_ticker(), "MSFT");

    s.ticker_input = "   ".to_string();
    assert_eq!(s.normalized_ticker(), "AAPL");

    s.ticker_input = String::new();
    assert_eq!(s.normalized_ticker(), "AAPL");
}

#[test]
fn health_event_updates_status_and_log() {
    let mut s = AppState::new("AAPL", None);
    s.apply(AppEvent::HealthChecked {
        healthy: true,
        detail: "Backend ok (model ready: true)".to_string(),
    });
    assert_eq!(s.backend_healthy, Some(true));
    assert!(s.log_messages.iter().any(|m| m.contains("Backend ok")));
}

#[test]
fn log_is_bounded() {
    let mut s = AppState::new("AAPL", None);
    for i in 0..250 {
        s.push_log(format!("line {}", i));
    }
    assert_eq!(s.log_messages.len(), 200);
    assert_eq!(s.log_messages.last().unwrap(), "line 249");
}
