use crate::api::types::PredictionResult;

/// Events delivered to the UI loop from spawned backend tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of a predict/retrain call. `seq` identifies which call
    /// this completion belongs to; only the latest is applied.
    CallCompleted {
        seq: u64,
        outcome: Result<Box<PredictionResult>, String>,
    },
    HealthChecked {
        healthy: bool,
        detail: String,
    },
    LogMessage(String),
}
