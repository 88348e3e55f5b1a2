use crate::error::ClientError;

use super::rest_request::RestRequest;

/*----- */
// Authenticator
/*----- */
pub trait Authenticator {
    fn api_key(&self) -> &str;

    fn generate_signature(&self, payload: &[u8]) -> Result<String, ClientError>;
}

/*----- */
// ExchangeRequestBuilder
/*----- */
pub trait ExchangeRequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: &Request,
    ) -> Result<reqwest::Request, ClientError>
    where
        Request: RestRequest;
}
