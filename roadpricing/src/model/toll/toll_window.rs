use super::TollError;
use roadpricing_core::model::SimTime;
use serde::{Deserialize, Serialize};

/// a time-of-day window `[start, end)` charging a base amount per link entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollWindow {
    pub start: SimTime,
    pub end: SimTime,
    pub amount: f64,
}

impl TollWindow {
    pub fn new(start: SimTime, end: SimTime, amount: f64) -> TollWindow {
        TollWindow { start, end, amount }
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start.seconds() <= time && time < self.end.seconds()
    }
}

/// toll windows ordered by start time, without overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct TollScheme {
    windows: Vec<TollWindow>,
}

impl TollScheme {
    pub fn try_new(mut windows: Vec<TollWindow>) -> Result<TollScheme, TollError> {
        if windows.is_empty() {
            return Err(TollError::ConfigurationError(String::from(
                "toll scheme requires at least one window",
            )));
        }
        for w in windows.iter() {
            let (start, end) = (w.start.seconds(), w.end.seconds());
            if !start.is_finite() || !end.is_finite() || start >= end {
                return Err(TollError::ConfigurationError(format!(
                    "toll window [{}, {}) must have start before end",
                    w.start, w.end
                )));
            }
            if !w.amount.is_finite() || w.amount < 0.0 {
                return Err(TollError::ConfigurationError(format!(
                    "toll window [{}, {}) has invalid amount {}",
                    w.start, w.end, w.amount
                )));
            }
        }
        windows.sort_by(|a, b| a.start.seconds().total_cmp(&b.start.seconds()));
        for pair in windows.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start.seconds() < prev.end.seconds() {
                return Err(TollError::ConfigurationError(format!(
                    "toll windows [{}, {}) and [{}, {}) overlap",
                    prev.start, prev.end, next.start, next.end
                )));
            }
        }
        Ok(TollScheme { windows })
    }

    /// the base amount of the window containing this time, if any.
    pub fn amount_at(&self, time: f64) -> Option<f64> {
        let idx = self
            .windows
            .partition_point(|w| w.start.seconds() <= time);
        let window = self.windows.get(idx.checked_sub(1)?)?;
        if window.contains(time) {
            Some(window.amount)
        } else {
            None
        }
    }

    pub fn windows(&self) -> &[TollWindow] {
        &self.windows
    }
}
