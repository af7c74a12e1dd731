use serde::Serialize;
use tracing::debug;

use crate::analyzers::reduce::normalize_hours;
use crate::analyzers::score::{ScoringConfig, score_hours};
use crate::analyzers::types::{NormalizedHourlyRecord, ScoredHour, WindowResult};
use crate::analyzers::window::{WindowConfig, best_window};
use crate::forecast::RawHourlyReading;

/// Result of scoring one forecast: every hour with its score, plus the best
/// session window within the lookahead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub hours: Vec<ScoredHour>,
    pub best: WindowResult,
}

impl Analysis {
    /// Conditions for the current hour, i.e. the first forecast hour.
    pub fn current(&self) -> Option<&NormalizedHourlyRecord> {
        self.hours.first().map(|h| &h.record)
    }
}

/// Normalizes, scores and searches a raw forecast. Never fails.
pub fn analyze(
    raw: &[RawHourlyReading],
    scoring: &ScoringConfig,
    window: &WindowConfig,
) -> Analysis {
    let hours = score_hours(normalize_hours(raw), scoring);
    let best = best_window(&hours, window);

    debug!(
        hours = hours.len(),
        best_score = best.score(),
        "Forecast analyzed"
    );

    Analysis { hours, best }
}
