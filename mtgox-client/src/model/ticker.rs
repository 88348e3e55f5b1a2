use crate::exchange::requests::ticker::RawTicker;

/*----- */
// Ticker
/*----- */
// Point-in-time snapshot for one currency pair, replaced wholesale on each
// fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub buy: f64,
    pub sell: f64,
    pub high: f64,
    pub low: f64,
    pub price: f64,
    pub volume: f64,
    pub vwap: f64,
    pub currency: String,
}

impl Ticker {
    pub fn from_raw(raw: RawTicker, currency: impl Into<String>) -> Self {
        Self {
            buy: raw.buy,
            sell: raw.sell,
            high: raw.high,
            low: raw.low,
            price: raw.last,
            volume: raw.vol,
            vwap: raw.vwap,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::requests::ticker::TickerResponse;

    #[test]
    fn raw_fields_map_onto_the_snapshot() {
        let response = serde_json::from_str::<TickerResponse>(
            r#"{
                "ticker": {
                    "high": 5.7, "low": 5.33, "vwap": 5.53, "vol": 55829,
                    "last": 5.44, "buy": 5.43, "sell": 5.44
                }
            }"#,
        )
        .unwrap();

        let ticker = Ticker::from_raw(response.ticker, "USD");
        assert_eq!(ticker.price, 5.44);
        assert_eq!(ticker.volume, 55829.0);
        assert_eq!(ticker.buy, 5.43);
        assert_eq!(ticker.sell, 5.44);
        assert_eq!(ticker.high, 5.7);
        assert_eq!(ticker.low, 5.33);
        assert_eq!(ticker.vwap, 5.53);
        assert_eq!(ticker.currency, "USD");
    }
}
