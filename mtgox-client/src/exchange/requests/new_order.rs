use std::borrow::Cow;

use serde::Serialize;

use crate::{model::order::OrderTypeCode, protocols::http::rest_request::RestRequest};

use super::get_orders::OrdersResponse;

/*----- */
// Mt.Gox New Order
/*----- */
// The buy and sell sides live on separate endpoints; the side only selects
// the path and is not part of the form body.
#[derive(Debug, Serialize)]
pub struct PlaceOrder {
    #[serde(skip)]
    side: OrderTypeCode,
    amount: f64,
    price: f64,
    #[serde(rename = "Currency")]
    currency: String,
}

impl PlaceOrder {
    pub fn buy(amount: f64, price: f64, currency: impl Into<String>) -> Self {
        Self {
            side: OrderTypeCode::Buy,
            amount,
            price,
            currency: currency.into(),
        }
    }

    pub fn sell(amount: f64, price: f64, currency: impl Into<String>) -> Self {
        Self {
            side: OrderTypeCode::Sell,
            amount,
            price,
            currency: currency.into(),
        }
    }
}

impl RestRequest for PlaceOrder {
    type Response = OrdersResponse;
    type QueryParams = ();
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        match self.side {
            OrderTypeCode::Buy => Cow::Borrowed("/api/0/buyBTC.php"),
            OrderTypeCode::Sell => Cow::Borrowed("/api/0/sellBTC.php"),
        }
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
    fn path_switches_on_side() {
        assert_eq!(PlaceOrder::buy(1.0, 5.0, "USD").path(), "/api/0/buyBTC.php");
        assert_eq!(PlaceOrder::sell(1.0, 5.0, "USD").path(), "/api/0/sellBTC.php");
    }

    #[test]
    fn body_excludes_the_side_tag() {
        let encoded = serde_urlencoded::to_string(PlaceOrder::buy(0.73, 10.5, "USD")).unwrap();
        assert_eq!(encoded, "amount=0.73&price=10.5&Currency=USD");
    }
}
