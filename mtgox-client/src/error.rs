use reqwest::StatusCode;
use thiserror::Error;

/*----- */
// ClientError
/*----- */
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("parsing error: {0}")]
    ParsingError(String),

    #[error("deserialising JSON error: {error} for payload: {payload}")]
    Deserialise {
        error: serde_json::Error,
        payload: String,
    },

    #[error("form encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),

    #[error("no resting {side} offers for {currency}")]
    EmptyBook {
        side: &'static str,
        currency: String,
    },

    #[error("not found (status={status}): {body}")]
    NotFound { status: StatusCode, body: String },

    #[error("missing or invalid API credentials: {0}")]
    Credentials(String),

    #[error("unauthorised: {0}")]
    Unauthorised(String),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(StatusCode, String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        match error {
            error if error.is_timeout() => ClientError::HttpTimeout(error),
            error => ClientError::Http(error),
        }
    }
}

impl ClientError {
    // Identifier-mode cancellation target missing from the remote order list.
    pub fn order_not_found() -> Self {
        ClientError::NotFound {
            status: StatusCode::NOT_FOUND,
            body: String::from("Order not found."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_not_found_carries_404_semantics() {
        match ClientError::order_not_found() {
            ClientError::NotFound { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "Order not found.");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
