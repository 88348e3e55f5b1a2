use std::collections::HashMap;

use crate::exchange::requests::info::WalletsResponse;

// Flattens the nested per-currency wallet structure into currency -> amount.
// No ordering guarantee on the keys.
pub fn from_wallets(response: WalletsResponse) -> HashMap<String, f64> {
    response
        .wallets
        .into_iter()
        .map(|(currency, wallet)| (currency, wallet.balance.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallets_flatten_to_currency_amounts() {
        let response = serde_json::from_str::<WalletsResponse>(
            r#"{
                "Wallets": {
                    "BTC": {"Balance": {"value": "22.0"}},
                    "USD": {"Balance": {"value": 3.7}},
                    "EUR": {"Balance": {"value": "0"}}
                }
            }"#,
        )
        .unwrap();

        let balances = from_wallets(response);
        assert_eq!(balances.len(), 3);
        assert_eq!(balances["BTC"], 22.0);
        assert_eq!(balances["USD"], 3.7);
        assert_eq!(balances["EUR"], 0.0);
    }
}
