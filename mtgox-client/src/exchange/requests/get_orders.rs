use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    protocols::http::rest_request::RestRequest,
    shared::de::{de_flexible_f64, de_flexible_string, de_u64_epoch_s_as_datetime_utc},
};

/*----- */
// Mt.Gox Get Orders
/*----- */
#[derive(Debug, Default)]
pub struct GetOrdersRequest;

impl RestRequest for GetOrdersRequest {
    type Response = OrdersResponse;
    type QueryParams = ();
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/getOrders.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn requires_auth() -> bool {
        true
    }
}

/*----- */
// Orders Response
/*----- */
// Shared by order listing, placement and cancellation: each answers with the
// refreshed order list.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<RawOrder>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    #[serde(deserialize_with = "de_flexible_string")]
    pub oid: String,
    #[serde(rename = "type")]
    pub type_code: i64,
    pub currency: String,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub price: f64,
    #[serde(deserialize_with = "de_u64_epoch_s_as_datetime_utc")]
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_response_deserializes() {
        let response = r#"{
            "usds": "100.00",
            "btcs": "2.5",
            "orders": [
                {"oid": "bddd042c-e837-4a88-a92e-3b7c05e483df", "currency": "USD",
                 "item": "BTC", "type": 2, "amount": "0.73", "price": "10.0",
                 "status": 1, "dark": 0, "date": 1326705230}
            ]
        }"#;

        let parsed = serde_json::from_str::<OrdersResponse>(response).unwrap();
        assert_eq!(parsed.orders.len(), 1);
        assert_eq!(parsed.orders[0].oid, "bddd042c-e837-4a88-a92e-3b7c05e483df");
        assert_eq!(parsed.orders[0].type_code, 2);
        assert_eq!(parsed.orders[0].currency, "USD");
        assert_eq!(parsed.orders[0].amount, 0.73);
        assert_eq!(parsed.orders[0].date.timestamp(), 1326705230);
    }

    #[test]
    fn malformed_order_amount_fails() {
        let response = r#"{
            "orders": [
                {"oid": "1", "currency": "USD", "type": 2, "amount": "lots",
                 "price": "10.0", "date": 1326705230}
            ]
        }"#;

        assert!(serde_json::from_str::<OrdersResponse>(response).is_err());
    }
}
