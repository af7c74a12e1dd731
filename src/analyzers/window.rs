//! Best contiguous session window over a scored forecast.

use tracing::trace;

use crate::analyzers::types::{BestWindow, ScoredHour, WindowResult};
use crate::analyzers::utility::mean;

pub const DEFAULT_BLOCK_HOURS: usize = 2;
pub const DEFAULT_LOOKAHEAD_HOURS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Length of the session block, in consecutive hours.
    pub block_hours: usize,
    /// Only the leading hours of the forecast are searched.
    pub lookahead_hours: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            block_hours: DEFAULT_BLOCK_HOURS,
            lookahead_hours: DEFAULT_LOOKAHEAD_HOURS,
        }
    }
}

/// Finds the `block_hours`-long run with the highest mean score.
///
/// Windows are scanned front to back and a later window replaces the current
/// best only when strictly better, so ties resolve to the earliest start.
/// When fewer hours than `block_hours` are available, the single window
/// covering all of them is returned, averaged over the hours it contains.
pub fn find_best_window(hours: &[ScoredHour], block_hours: usize) -> WindowResult {
    if hours.is_empty() {
        return WindowResult::NoData;
    }

    let block = block_hours.max(1).min(hours.len());
    let scores: Vec<f64> = hours.iter().map(|h| h.score).collect();

    let mut best_start = 0;
    let mut best_avg = mean(&scores[..block]);

    for (start, window) in scores.windows(block).enumerate().skip(1) {
        let avg = mean(window);
        if avg > best_avg {
            trace!(start, avg, "new best window");
            best_start = start;
            best_avg = avg;
        }
    }

    let best_end = best_start + block - 1;

    WindowResult::Found(BestWindow {
        start: hours[best_start].record.time.clone(),
        end: hours[best_end].record.time.clone(),
        average: best_avg,
        hours: block,
        partial: block < block_hours.max(1),
    })
}

/// Runs [`find_best_window`] over the first `lookahead_hours` of the forecast.
pub fn best_window(hours: &[ScoredHour], config: &WindowConfig) -> WindowResult {
    let horizon = &hours[..hours.len().min(config.lookahead_hours)];
    find_best_window(horizon, config.block_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::NormalizedHourlyRecord;

    fn scored(scores: &[f64]) -> Vec<ScoredHour> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredHour {
                record: NormalizedHourlyRecord {
                    time: format!("2025-11-27T{:02}:00:00+00:00", i),
                    ..Default::default()
                },
                score,
            })
            .collect()
    }

    fn found(result: WindowResult) -> BestWindow {
        match result {
            WindowResult::Found(w) => w,
            WindowResult::NoData => panic!("expected a window"),
        }
    }

    #[test]
    fn test_empty_is_no_data() {
        let result = find_best_window(&[], 2);
        assert_eq!(result, WindowResult::NoData);
        assert_eq!(result.score(), 0.0);
        assert!(result.window().is_none());
    }

    #[test]
    fn test_picks_highest_average_pair() {
        let w = found(find_best_window(&scored(&[1.0, 2.0, 6.0, 7.0, 3.0]), 2));

        assert_eq!(w.start, "2025-11-27T02:00:00+00:00");
        assert_eq!(w.end, "2025-11-27T03:00:00+00:00");
        assert_eq!(w.average, 6.5);
        assert_eq!(w.hours, 2);
        assert!(!w.partial);
    }

    #[test]
    fn test_tie_keeps_earliest_window() {
        let w = found(find_best_window(&scored(&[5.0, 5.0, 1.0, 5.0, 5.0]), 2));
        assert_eq!(w.start, "2025-11-27T00:00:00+00:00");
        assert_eq!(w.end, "2025-11-27T01:00:00+00:00");
    }

    #[test]
    fn test_all_zero_scores_still_yield_first_window() {
        let w = found(find_best_window(&scored(&[0.0, 0.0, 0.0]), 2));
        assert_eq!(w.start, "2025-11-27T00:00:00+00:00");
        assert_eq!(w.average, 0.0);
    }

    #[test]
    fn test_shorter_than_block_is_partial_and_prorated() {
        let w = found(find_best_window(&scored(&[4.0]), 2));

        assert_eq!(w.start, "2025-11-27T00:00:00+00:00");
        assert_eq!(w.end, "2025-11-27T00:00:00+00:00");
        assert_eq!(w.average, 4.0);
        assert_eq!(w.hours, 1);
        assert!(w.partial);

        let w = found(find_best_window(&scored(&[2.0, 4.0]), 3));
        assert_eq!(w.end, "2025-11-27T01:00:00+00:00");
        assert_eq!(w.average, 3.0);
    }

    #[test]
    fn test_zero_block_is_single_hour() {
        let w = found(find_best_window(&scored(&[1.0, 3.0, 2.0]), 0));
        assert_eq!(w.start, "2025-11-27T01:00:00+00:00");
        assert_eq!(w.end, w.start);
        assert!(!w.partial);
    }

    #[test]
    fn test_lookahead_ignores_later_hours() {
        let hours = scored(&[1.0, 1.0, 2.0, 2.0, 9.0, 9.0]);
        let config = WindowConfig {
            block_hours: 2,
            lookahead_hours: 4,
        };
        let w = found(best_window(&hours, &config));
        assert_eq!(w.start, "2025-11-27T02:00:00+00:00");
        assert_eq!(w.average, 2.0);
    }

    #[test]
    fn test_lookahead_zero_is_no_data() {
        let config = WindowConfig {
            block_hours: 2,
            lookahead_hours: 0,
        };
        assert_eq!(best_window(&scored(&[1.0]), &config), WindowResult::NoData);
    }
}
