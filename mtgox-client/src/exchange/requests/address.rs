use std::borrow::Cow;

use serde::Deserialize;

use crate::protocols::http::rest_request::RestRequest;

/*----- */
// Mt.Gox Deposit Address
/*----- */
#[derive(Debug, Default)]
pub struct AddressRequest;

impl RestRequest for AddressRequest {
    type Response = AddressResponse;
    type QueryParams = ();
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/btcAddress.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn requires_auth() -> bool {
        true
    }
}

#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    pub addr: String,
}
