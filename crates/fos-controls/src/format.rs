//! Time Formatting
//!
//! Splits a playback position into clock parts for the time labels.

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Clock parts of a time in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeParts {
    /// Visible label, `mm:ss`. Hours are never rendered.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    /// Machine-readable `datetime` attribute, `MMm SSs`
    pub fn datetime(&self) -> String {
        format!("{:02}m {:02}s", self.minutes, self.seconds)
    }
}

/// Split seconds into time-of-day parts.
///
/// Fractional seconds are truncated and the result wraps at 24 hours.
/// Negative and non-finite inputs format as zero.
pub fn format_time(time_in_seconds: f64) -> TimeParts {
    let total = if time_in_seconds.is_finite() && time_in_seconds > 0.0 {
        (time_in_seconds.floor() as u64) % SECONDS_PER_DAY
    } else {
        0
    };

    TimeParts {
        hours: (total / 3600) as u32,
        minutes: ((total % 3600) / 60) as u32,
        seconds: (total % 60) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        let t = format_time(125.0);
        assert_eq!(t.label(), "02:05");
        assert_eq!(t.datetime(), "02m 05s");
    }

    #[test]
    fn test_fraction_truncated() {
        assert_eq!(format_time(30.999).label(), "00:30");
    }

    #[test]
    fn test_hours_not_rendered() {
        let t = format_time(3725.0);
        assert_eq!(t.hours, 1);
        assert_eq!(t.label(), "02:05");
    }

    #[test]
    fn test_wraps_at_day() {
        assert_eq!(format_time(86_400.0 + 61.0), TimeParts { hours: 0, minutes: 1, seconds: 1 });
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(format_time(f64::NAN).label(), "00:00");
        assert_eq!(format_time(f64::INFINITY).label(), "00:00");
        assert_eq!(format_time(-4.0).label(), "00:00");
    }
}
