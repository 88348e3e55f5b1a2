use chrono::{DateTime, Utc};

use crate::exchange::requests::{get_orders::RawOrder, trades::RawTrade};

/*----- */
// Order type codes
/*----- */
// The remote API tags a user's orders with a small integer: 1 for sell,
// 2 for buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTypeCode {
    Sell,
    Buy,
}

impl OrderTypeCode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(OrderTypeCode::Sell),
            2 => Some(OrderTypeCode::Buy),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            OrderTypeCode::Sell => 1,
            OrderTypeCode::Buy => 2,
        }
    }
}

/*----- */
// Trade
/*----- */
// One record of the public trade feed. The feed record carries no currency
// field, so the caller supplies the pair it asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub price: f64,
    pub currency: String,
}

impl Trade {
    pub fn from_raw(raw: RawTrade, currency: &str) -> Self {
        Self {
            id: raw.tid,
            date: raw.date,
            amount: raw.amount,
            price: raw.price,
            currency: currency.to_owned(),
        }
    }

    // Chronologically ascending view of the raw feed. Stable on equal
    // timestamps.
    pub fn from_feed(mut raws: Vec<RawTrade>, currency: &str) -> Vec<Trade> {
        raws.sort_by_key(|raw| raw.date);
        raws.into_iter()
            .map(|raw| Trade::from_raw(raw, currency))
            .collect()
    }
}

/*----- */
// Buy / Sell
/*----- */
// The user's own resting orders, one type per side.
#[derive(Debug, Clone, PartialEq)]
pub struct Buy {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub price: f64,
    pub currency: String,
}

impl From<RawOrder> for Buy {
    fn from(raw: RawOrder) -> Self {
        Self {
            id: raw.oid,
            date: raw.date,
            amount: raw.amount,
            price: raw.price,
            currency: raw.currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sell {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub price: f64,
    pub currency: String,
}

impl From<RawOrder> for Sell {
    fn from(raw: RawOrder) -> Self {
        Self {
            id: raw.oid,
            date: raw.date,
            amount: raw.amount,
            price: raw.price,
            currency: raw.currency,
        }
    }
}

/*----- */
// CancelTarget
/*----- */
// Exactly the two fields a cancellation request may carry; constructing one
// from a richer record strips everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelTarget {
    pub oid: String,
    pub order_type: OrderTypeCode,
}

impl CancelTarget {
    pub fn from_raw(raw: &RawOrder) -> Option<Self> {
        OrderTypeCode::from_code(raw.type_code).map(|order_type| Self {
            oid: raw.oid.clone(),
            order_type,
        })
    }
}

impl From<&Buy> for CancelTarget {
    fn from(buy: &Buy) -> Self {
        Self {
            oid: buy.id.clone(),
            order_type: OrderTypeCode::Buy,
        }
    }
}

impl From<&Sell> for CancelTarget {
    fn from(sell: &Sell) -> Self {
        Self {
            oid: sell.id.clone(),
            order_type: OrderTypeCode::Sell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        assert_eq!(OrderTypeCode::from_code(1), Some(OrderTypeCode::Sell));
        assert_eq!(OrderTypeCode::from_code(2), Some(OrderTypeCode::Buy));
        assert_eq!(OrderTypeCode::from_code(7), None);
        assert_eq!(OrderTypeCode::Sell.code(), 1);
        assert_eq!(OrderTypeCode::Buy.code(), 2);
    }

    #[test]
    fn buy_preserves_the_raw_record_fields() {
        let raw = serde_json::from_str::<RawOrder>(
            r#"{"oid": "abc-1", "currency": "USD", "type": 2, "amount": "0.73",
                "price": "10.0", "date": 1326705230}"#,
        )
        .unwrap();

        let buy = Buy::from(raw);
        assert_eq!(buy.id, "abc-1");
        assert_eq!(buy.date.timestamp(), 1326705230);
        assert_eq!(buy.amount, 0.73);
        assert_eq!(buy.price, 10.0);
        assert_eq!(buy.currency, "USD");
    }

    #[test]
    fn trade_feed_is_sorted_chronologically() {
        let raws = serde_json::from_str::<Vec<RawTrade>>(
            r#"[
                {"tid": "3", "date": 300, "amount": 1, "price": 5},
                {"tid": "1", "date": 100, "amount": 1, "price": 5},
                {"tid": "2", "date": 200, "amount": 1, "price": 5}
            ]"#,
        )
        .unwrap();

        let trades = Trade::from_feed(raws, "USD");
        let ids: Vec<&str> = trades.iter().map(|trade| trade.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(trades.iter().all(|trade| trade.currency == "USD"));
    }

    #[test]
    fn cancel_target_strips_everything_but_id_and_type() {
        let raw = serde_json::from_str::<RawOrder>(
            r#"{"oid": "abc-1", "currency": "USD", "type": 1, "amount": "0.73",
                "price": "10.0", "date": 1326705230}"#,
        )
        .unwrap();

        let target = CancelTarget::from_raw(&raw).unwrap();
        assert_eq!(
            target,
            CancelTarget {
                oid: String::from("abc-1"),
                order_type: OrderTypeCode::Sell,
            }
        );
    }

    #[test]
    fn cancel_target_requires_a_recognized_type_code() {
        let raw = serde_json::from_str::<RawOrder>(
            r#"{"oid": "abc-1", "currency": "USD", "type": 9, "amount": "0.73",
                "price": "10.0", "date": 1326705230}"#,
        )
        .unwrap();

        assert_eq!(CancelTarget::from_raw(&raw), None);
    }
}
