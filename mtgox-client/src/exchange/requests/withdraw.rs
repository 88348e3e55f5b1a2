use std::borrow::Cow;

use serde::Serialize;

use crate::protocols::http::rest_request::RestRequest;

use super::info::WalletsResponse;

/*----- */
// Mt.Gox Withdraw
/*----- */
#[derive(Debug, Serialize)]
pub struct WithdrawRequest {
    group1: &'static str,
    amount: f64,
    btca: String,
}

impl WithdrawRequest {
    pub fn new(amount: f64, address: impl Into<String>) -> Self {
        Self {
            group1: "BTC",
            amount,
            btca: address.into(),
        }
    }
}

impl RestRequest for WithdrawRequest {
    // The service answers with the refreshed wallet balances.
    type Response = WalletsResponse;
    type QueryParams = ();
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/withdraw.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn requires_auth() -> bool {
        true
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_targets_the_btc_wallet_group() {
        let encoded =
            serde_urlencoded::to_string(WithdrawRequest::new(1.0, "1KxSo9bGBfPVFEtW")).unwrap();
        assert_eq!(encoded, "group1=BTC&amount=1.0&btca=1KxSo9bGBfPVFEtW");
    }
}
