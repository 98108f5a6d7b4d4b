use thiserror::Error;

/// Failures a client-side lookup can report back to the user.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no match for {0}")]
    NotFound(String),
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl LookupError {
    /// Short notice shown to the user. Missing cities and provider outages
    /// read the same way.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::NotFound(_) | Self::UpstreamUnavailable(_) => {
                "City not found or API error.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_outage_share_a_notice() {
        let missing = LookupError::NotFound("Atlantis".to_string());
        let outage = LookupError::UpstreamUnavailable("timeout".to_string());
        assert_eq!(missing.notice(), outage.notice());
    }

    #[test]
    fn invalid_input_notice_is_the_message() {
        let err = LookupError::InvalidInput("Please enter a city name.".to_string());
        assert_eq!(err.notice(), "Please enter a city name.");
        assert_eq!(err.to_string(), "invalid input: Please enter a city name.");
    }
}
