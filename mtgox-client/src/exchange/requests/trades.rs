use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    protocols::http::rest_request::RestRequest,
    shared::de::{de_flexible_f64, de_flexible_string, de_u64_epoch_s_as_datetime_utc},
};

/*----- */
// Mt.Gox Trades
/*----- */
#[derive(Debug, Serialize)]
pub struct TradesRequest {
    #[serde(rename = "Currency")]
    currency: String,
}

impl TradesRequest {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl RestRequest for TradesRequest {
    type Response = Vec<RawTrade>;
    type QueryParams = Self;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/data/getTrades.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        Some(self)
    }
}

/*----- */
// Mt.Gox Trades - Response
/*----- */
// The public feed record carries no currency field; the caller knows which
// pair it asked for.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrade {
    #[serde(deserialize_with = "de_flexible_string")]
    pub tid: String,
    #[serde(deserialize_with = "de_u64_epoch_s_as_datetime_utc")]
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub price: f64,
}
