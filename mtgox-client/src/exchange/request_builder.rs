use base64::Engine;
use chrono::Utc;
use hmac::Mac;

use crate::{
    config::Credentials,
    error::ClientError,
    protocols::http::{
        request_builder::{Authenticator, ExchangeRequestBuilder},
        rest_request::RestRequest,
    },
};

use super::HmacSha512;

/*----- */
// Mt.Gox API Authentication
/*----- */
#[derive(Debug, Clone)]
pub struct MtGoxAuthParams {
    credentials: Credentials,
}

impl MtGoxAuthParams {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl Authenticator for MtGoxAuthParams {
    fn api_key(&self) -> &str {
        &self.credentials.key
    }

    // Rest-Sign is the base64 HMAC-SHA512 of the form body, keyed with the
    // base64-decoded API secret.
    fn generate_signature(&self, payload: &[u8]) -> Result<String, ClientError> {
        let secret = base64::engine::general_purpose::STANDARD
            .decode(&self.credentials.secret)
            .map_err(|error| {
                ClientError::Credentials(format!("API secret is not valid base64: {error}"))
            })?;
        let mut mac = HmacSha512::new_from_slice(&secret)
            .map_err(|error| ClientError::Credentials(error.to_string()))?;
        mac.update(payload);
        Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/*----- */
// Mt.Gox Request Builder
/*----- */
#[derive(Debug, Default)]
pub struct MtGoxRequestBuilder {
    auth: Option<MtGoxAuthParams>,
}

impl MtGoxRequestBuilder {
    pub fn new(auth: Option<MtGoxAuthParams>) -> Self {
        Self { auth }
    }

    // Private endpoints take a form-encoded body with a strictly increasing
    // nonce as the first field.
    fn generate_body<Request>(request: &Request, nonce: i64) -> Result<String, ClientError>
    where
        Request: RestRequest,
    {
        match request.body() {
            Some(body) => {
                let encoded = serde_urlencoded::to_string(body)?;
                if encoded.is_empty() {
                    Ok(format!("nonce={nonce}"))
                } else {
                    Ok(format!("nonce={nonce}&{encoded}"))
                }
            }
            None => Ok(format!("nonce={nonce}")),
        }
    }
}

impl ExchangeRequestBuilder for MtGoxRequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: &Request,
    ) -> Result<reqwest::Request, ClientError>
    where
        Request: RestRequest,
    {
        if !Request::requires_auth() {
            let builder = match request.query_params() {
                Some(params) => builder.query(params),
                None => builder,
            };
            return builder.build().map_err(ClientError::from);
        }

        let auth = self.auth.as_ref().ok_or_else(|| {
            ClientError::Credentials(String::from(
                "private endpoint called without API credentials",
            ))
        })?;

        let nonce = Utc::now().timestamp_micros();
        let body = Self::generate_body(request, nonce)?;
        let signature = auth.generate_signature(body.as_bytes())?;

        builder
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Rest-Key", auth.api_key())
            .header("Rest-Sign", signature)
            .body(body)
            .build()
            .map_err(ClientError::from)
    }
}
