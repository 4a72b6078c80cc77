use thiserror::Error;

/// weekgrid error types
#[derive(Error, Debug)]
pub enum WeekgridError {
    /// Event would end at or before its start
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// Color string or channel out of range
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Time string could not be parsed
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Time range auto-detection needs at least one event
    #[error("cannot determine time range: schedule has no events")]
    EmptySchedule,

    /// Resolved time range is empty or inverted
    #[error("invalid time range: {min} to {max}")]
    InvalidTimeRange { min: f64, max: f64 },

    /// Malformed event file
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Font file could not be used
    #[error("font error: {0}")]
    Font(String),

    /// PDF backend failure
    #[error("pdf error: {0}")]
    Pdf(String),
}

/// Result type alias for weekgrid
pub type Result<T> = std::result::Result<T, WeekgridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WeekgridError::Parse("event #3: missing field `days`".into());
        assert_eq!(err.to_string(), "parse error: event #3: missing field `days`");
    }

    #[test]
    fn test_time_range_display() {
        let err = WeekgridError::InvalidTimeRange { min: 9.0, max: 9.0 };
        assert_eq!(err.to_string(), "invalid time range: 9 to 9");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeekgridError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
