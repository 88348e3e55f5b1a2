use tracing::warn;

use crate::{
    exchange::requests::get_orders::RawOrder,
    model::order::{Buy, CancelTarget, OrderTypeCode, Sell},
};

/*----- */
// OrderLedger
/*----- */
// The user's open orders partitioned by side, both oldest-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    pub buys: Vec<Buy>,
    pub sells: Vec<Sell>,
}

impl OrderLedger {
    // Records with a type code the API does not document are skipped; they
    // are logged rather than failing the batch.
    pub fn from_raw(mut orders: Vec<RawOrder>) -> Self {
        orders.sort_by_key(|order| order.date);

        let mut ledger = OrderLedger::default();
        for order in orders {
            match OrderTypeCode::from_code(order.type_code) {
                Some(OrderTypeCode::Sell) => ledger.sells.push(Sell::from(order)),
                Some(OrderTypeCode::Buy) => ledger.buys.push(Buy::from(order)),
                None => warn!(
                    oid = %order.oid,
                    type_code = order.type_code,
                    "skipping order with unrecognized type code"
                ),
            }
        }
        ledger
    }
}

/*----- */
// Cancellation lookup
/*----- */
// Identifier-mode resolution: linear search of the remote order list by the
// identifier's string form.
pub fn find_cancel_target(orders: &[RawOrder], id: &str) -> Option<CancelTarget> {
    orders
        .iter()
        .find(|order| order.oid == id)
        .and_then(CancelTarget::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_orders() -> Vec<RawOrder> {
        serde_json::from_str(
            r#"[
                {"oid": "s-2", "currency": "USD", "type": 1, "amount": "1.0",
                 "price": "6.0", "date": 400},
                {"oid": "b-1", "currency": "USD", "type": 2, "amount": "0.5",
                 "price": "5.0", "date": 300},
                {"oid": "x-1", "currency": "USD", "type": 9, "amount": "9.9",
                 "price": "9.9", "date": 200},
                {"oid": "s-1", "currency": "USD", "type": 1, "amount": "2.0",
                 "price": "5.5", "date": 100}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn orders_partition_by_type_code_oldest_first() {
        let ledger = OrderLedger::from_raw(raw_orders());

        let sell_ids: Vec<&str> = ledger.sells.iter().map(|sell| sell.id.as_str()).collect();
        assert_eq!(sell_ids, vec!["s-1", "s-2"]);

        let buy_ids: Vec<&str> = ledger.buys.iter().map(|buy| buy.id.as_str()).collect();
        assert_eq!(buy_ids, vec!["b-1"]);
    }

    #[test]
    fn unrecognized_type_codes_appear_in_neither_collection() {
        let ledger = OrderLedger::from_raw(raw_orders());

        assert_eq!(ledger.buys.len() + ledger.sells.len(), 3);
        assert!(ledger.buys.iter().all(|buy| buy.id != "x-1"));
        assert!(ledger.sells.iter().all(|sell| sell.id != "x-1"));
    }

    #[test]
    fn cancel_target_resolves_by_identifier() {
        let orders = raw_orders();

        let target = find_cancel_target(&orders, "b-1").unwrap();
        assert_eq!(target.oid, "b-1");
        assert_eq!(target.order_type, OrderTypeCode::Buy);

        assert_eq!(find_cancel_target(&orders, "99999"), None);
    }
}
