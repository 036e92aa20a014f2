use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

/// a point in simulated time, in seconds since midnight of the first
/// simulated day. values beyond 24 hours are valid (trips running past
/// midnight).
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct SimTime(pub f64);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SimTimeError {
    #[error("time '{0}' is not formatted as seconds, HH:MM or HH:MM:SS")]
    InvalidFormat(String),
    #[error("time '{0}' has minutes or seconds outside of [0, 60)")]
    OutOfRange(String),
}

impl SimTime {
    pub fn from_seconds(seconds: f64) -> SimTime {
        SimTime(seconds)
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> SimTime {
        SimTime((hours * 3600 + minutes * 60 + seconds) as f64)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }
}

impl FromStr for SimTime {
    type Err = SimTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(seconds) = trimmed.parse::<f64>() {
            return Ok(SimTime(seconds));
        }
        let invalid = || SimTimeError::InvalidFormat(trimmed.to_string());
        let parts = trimmed.split(':').collect::<Vec<_>>();
        let (h, m, sec) = match parts.as_slice() {
            [h, m] => (*h, *m, "0"),
            [h, m, s] => (*h, *m, *s),
            _ => return Err(invalid()),
        };
        let hours = h.parse::<u32>().map_err(|_| invalid())?;
        let minutes = m.parse::<u32>().map_err(|_| invalid())?;
        let seconds = sec.parse::<f64>().map_err(|_| invalid())?;
        if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
            return Err(SimTimeError::OutOfRange(trimmed.to_string()));
        }
        Ok(SimTime(
            hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds,
        ))
    }
}

impl Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() || self.0 < 0.0 {
            return write!(f, "{}", self.0);
        }
        let total = self.0.floor() as u64;
        let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl Serialize for SimTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract() == 0.0 && self.0 >= 0.0 {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for SimTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Seconds(f64),
            Clock(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Seconds(s) => Ok(SimTime(s)),
            Repr::Clock(s) => SimTime::from_str(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SimTime, SimTimeError};

    #[test]
    fn test_parse_clock_formats() {
        assert_eq!("07:00".parse::<SimTime>(), Ok(SimTime(25200.0)));
        assert_eq!("10:00:30".parse::<SimTime>(), Ok(SimTime(36030.0)));
        assert_eq!("27:15:00".parse::<SimTime>(), Ok(SimTime(98100.0)));
        assert_eq!("3600".parse::<SimTime>(), Ok(SimTime(3600.0)));
    }

    #[test]
    fn test_parse_rejects_bad_times() {
        assert!(matches!(
            "07:75".parse::<SimTime>(),
            Err(SimTimeError::OutOfRange(_))
        ));
        assert!(matches!(
            "seven".parse::<SimTime>(),
            Err(SimTimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        #[derive(serde::Deserialize)]
        struct Window {
            start: SimTime,
            end: SimTime,
        }
        let w: Window = serde_json::from_str(r#"{"start": "07:00:00", "end": 36000}"#)
            .expect("test invariant failed: window did not deserialize");
        assert_eq!(w.start, SimTime::from_hms(7, 0, 0));
        assert_eq!(w.end, SimTime::from_hms(10, 0, 0));
        assert_eq!(w.start.to_string(), "07:00:00");
    }
}
