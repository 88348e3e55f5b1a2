pub mod request_builder;
pub mod requests;

use hmac::Hmac;
use reqwest::StatusCode;
use serde::Deserialize;
use sha2::Sha512;

use crate::{error::ClientError, protocols::http::http_parser::HttpParser};

/*----- */
// Convenient types
/*----- */
pub type HmacSha512 = Hmac<Sha512>;

pub const MTGOX_BASE_URL: &str = "https://mtgox.com";

/*----- */
// Mt.Gox API Error
/*----- */
// Application-level failures arrive as {"error": "..."}, frequently with a
// 200 status code.
#[derive(Debug, Deserialize)]
pub struct MtGoxApiError {
    pub error: String,
}

/*----- */
// Mt.Gox Http Parser
/*----- */
#[derive(Debug, Default)]
pub struct MtGoxHttpParser;

impl HttpParser for MtGoxHttpParser {
    type ApiError = MtGoxApiError;
    type OutputError = ClientError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        match api_error.error.as_str() {
            message if message.contains("Must be logged in") => {
                ClientError::Unauthorised(api_error.error)
            }
            _ => ClientError::HttpResponse(status, api_error.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_payload_maps_to_remote_error() {
        let payload = br#"{"error": "Invalid currency"}"#;
        let result = MtGoxHttpParser.parse::<requests::get_orders::OrdersResponse>(
            StatusCode::OK,
            payload,
        );

        match result {
            Err(ClientError::HttpResponse(status, message)) => {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(message, "Invalid currency");
            }
            other => panic!("expected HttpResponse error, got {other:?}"),
        }
    }

    #[test]
    fn auth_failure_payload_maps_to_unauthorised() {
        let payload = br#"{"error": "Must be logged in"}"#;
        let result = MtGoxHttpParser.parse::<requests::get_orders::OrdersResponse>(
            StatusCode::FORBIDDEN,
            payload,
        );

        assert!(matches!(result, Err(ClientError::Unauthorised(_))));
    }

    #[test]
    fn undecodable_payload_surfaces_a_parse_error() {
        let payload = br#"{"unexpected": true}"#;
        let result = MtGoxHttpParser.parse::<requests::get_orders::OrdersResponse>(
            StatusCode::OK,
            payload,
        );

        assert!(matches!(result, Err(ClientError::Deserialise { .. })));
    }
}
