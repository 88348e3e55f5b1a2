use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{protocols::http::rest_request::RestRequest, shared::de::de_flexible_f64};

/*----- */
// Mt.Gox Ticker
/*----- */
#[derive(Debug, Serialize)]
pub struct TickerRequest {
    #[serde(rename = "Currency")]
    currency: String,
}

impl TickerRequest {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl RestRequest for TickerRequest {
    type Response = TickerResponse;
    type QueryParams = Self;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/data/ticker.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        Some(self)
    }
}

/*----- */
// Mt.Gox Ticker - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    pub ticker: RawTicker,
}

#[derive(Debug, Deserialize)]
pub struct RawTicker {
    #[serde(deserialize_with = "de_flexible_f64")]
    pub buy: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub sell: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub high: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub low: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub last: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub vol: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub vwap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_response_tolerates_extra_fields() {
        let response = r#"{
            "ticker": {
                "high": 5.7,
                "low": 5.33,
                "avg": 5.5168316,
                "vwap": 5.5303844,
                "vol": 55829,
                "last_all": 5.4401,
                "last_local": 5.44,
                "last": 5.44,
                "buy": 5.43011,
                "sell": 5.44,
                "updated": 1326707311000000
            }
        }"#;

        let parsed = serde_json::from_str::<TickerResponse>(response).unwrap();
        assert_eq!(parsed.ticker.last, 5.44);
        assert_eq!(parsed.ticker.vol, 55829.0);
        assert_eq!(parsed.ticker.buy, 5.43011);
    }

    #[test]
    fn malformed_ticker_field_fails() {
        let response = r#"{
            "ticker": {
                "high": "oops",
                "low": 5.33,
                "vwap": 5.5303844,
                "vol": 55829,
                "last": 5.44,
                "buy": 5.43011,
                "sell": 5.44
            }
        }"#;

        assert!(serde_json::from_str::<TickerResponse>(response).is_err());
    }
}
