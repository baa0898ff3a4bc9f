//! Health status display.

use std::fmt;

/// Display label for a `HealthCheckResponse.status` value.
///
/// Known codes map to their enum names; anything else is shown as the raw
/// integer so newer servers never break older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel(pub i32);

impl StatusLabel {
    /// Name for a known status code.
    pub fn name(&self) -> Option<&'static str> {
        match self.0 {
            0 => Some("UNKNOWN"),
            1 => Some("SERVING"),
            2 => Some("NOT_SERVING"),
            3 => Some("SERVICE_UNKNOWN"),
            _ => None,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(StatusLabel(0).to_string(), "UNKNOWN");
        assert_eq!(StatusLabel(1).to_string(), "SERVING");
        assert_eq!(StatusLabel(2).to_string(), "NOT_SERVING");
        assert_eq!(StatusLabel(3).to_string(), "SERVICE_UNKNOWN");
    }

    #[test]
    fn test_unknown_codes_show_raw_value() {
        for code in [4, 7, 42, -1, i32::MAX, i32::MIN] {
            assert_eq!(StatusLabel(code).name(), None);
            assert_eq!(StatusLabel(code).to_string(), code.to_string());
        }
    }

    #[cfg(feature = "bindings")]
    #[test]
    fn test_labels_match_generated_enum() {
        use crate::grpc::proto::health_check_response::ServingStatus;

        for status in [
            ServingStatus::Unknown,
            ServingStatus::Serving,
            ServingStatus::NotServing,
            ServingStatus::ServiceUnknown,
        ] {
            assert_eq!(StatusLabel(status as i32).name(), Some(status.as_str_name()));
        }
    }
}
