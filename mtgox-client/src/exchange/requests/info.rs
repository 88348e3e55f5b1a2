use std::borrow::Cow;
use std::collections::HashMap;

use serde::Deserialize;

use crate::{protocols::http::rest_request::RestRequest, shared::de::de_flexible_f64};

/*----- */
// Mt.Gox Account Info
/*----- */
#[derive(Debug, Default)]
pub struct InfoRequest;

impl RestRequest for InfoRequest {
    type Response = WalletsResponse;
    type QueryParams = ();
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/info.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn requires_auth() -> bool {
        true
    }
}

/*----- */
// Wallets Response
/*----- */
// Served by both the account-info and withdraw endpoints: a nested
// per-currency wallet structure.
#[derive(Debug, Deserialize)]
pub struct WalletsResponse {
    #[serde(rename = "Wallets")]
    pub wallets: HashMap<String, RawWallet>,
}

#[derive(Debug, Deserialize)]
pub struct RawWallet {
    #[serde(rename = "Balance")]
    pub balance: RawWalletBalance,
}

#[derive(Debug, Deserialize)]
pub struct RawWalletBalance {
    #[serde(deserialize_with = "de_flexible_f64")]
    pub value: f64,
}
