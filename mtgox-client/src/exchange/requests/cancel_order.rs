use std::borrow::Cow;

use serde::Serialize;

use crate::{model::order::CancelTarget, protocols::http::rest_request::RestRequest};

use super::get_orders::OrdersResponse;

/*----- */
// Mt.Gox Cancel Order
/*----- */
// The body carries exactly the two fields the service needs to identify the
// order, whatever descriptor the caller started from.
#[derive(Debug, Serialize)]
pub struct CancelOrderRequest {
    oid: String,
    #[serde(rename = "type")]
    type_code: i64,
}

impl From<CancelTarget> for CancelOrderRequest {
    fn from(target: CancelTarget) -> Self {
        Self {
            oid: target.oid,
            type_code: target.order_type.code(),
        }
    }
}

impl RestRequest for CancelOrderRequest {
    type Response = OrdersResponse;
    type QueryParams = ();
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/cancelOrder.php")
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
    use crate::model::order::OrderTypeCode;

    #[test]
    fn body_is_exactly_oid_and_type() {
        let target = CancelTarget {
            oid: String::from("12345"),
            order_type: OrderTypeCode::Buy,
        };
        let encoded = serde_urlencoded::to_string(CancelOrderRequest::from(target)).unwrap();
        assert_eq!(encoded, "oid=12345&type=2");
    }
}
