use serde::Serialize;
use thiserror::Error;
use warp::{
    http::StatusCode,
    reply::{self, Reply, Response},
};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    MissingParameter(&'static str),
    #[error("{message}: {source:#}")]
    Upstream {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl GatewayError {
    pub fn upstream(message: &'static str, source: anyhow::Error) -> Self {
        Self::Upstream { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingParameter(message) | Self::Upstream { message, .. } => *message,
        }
    }
}

impl Reply for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        reply::with_status(reply::json(&body), self.status()).into_response()
    }
}
