use thiserror::Error;

/// Failure of a remote data fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("no {what} available for {league}")]
    NoEndpoint { what: &'static str, league: String },
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for LoadError {
    fn from(e: gloo_net::Error) -> Self {
        LoadError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LoadError::Status(503).to_string(), "HTTP error: 503");
        let err = LoadError::NoEndpoint {
            what: "results",
            league: "NCAA Women".into(),
        };
        assert_eq!(err.to_string(), "no results available for NCAA Women");

        let decode: LoadError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(decode, LoadError::Decode(_)));
    }
}
