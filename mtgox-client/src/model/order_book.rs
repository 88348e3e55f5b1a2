use crate::{
    error::ClientError,
    exchange::requests::depth::DepthResponse,
    model::offer::{Ask, Bid},
};

/*----- */
// OfferBook
/*----- */
// Both sides of the public book, each independently sorted with the best
// price first.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferBook {
    pub asks: Vec<Ask>,
    pub bids: Vec<Bid>,
    pub currency: String,
}

impl OfferBook {
    // Asks ascend by price, bids descend. Both sorts are stable: entries at
    // exactly equal prices keep the payload's relative order, so best-price
    // selection stays deterministic.
    pub fn from_depth(depth: DepthResponse, currency: &str) -> Result<Self, ClientError> {
        let mut asks = depth
            .asks
            .into_iter()
            .map(|level| Ask::from_level(level, currency))
            .collect::<Result<Vec<_>, _>>()?;
        asks.sort_by(|a, b| a.price.total_cmp(&b.price));

        let mut bids = depth
            .bids
            .into_iter()
            .map(|level| Bid::from_level(level, currency))
            .collect::<Result<Vec<_>, _>>()?;
        bids.sort_by(|a, b| b.price.total_cmp(&a.price));

        Ok(Self {
            asks,
            bids,
            currency: currency.to_owned(),
        })
    }

    pub fn min_ask(&self) -> Result<MinAsk, ClientError> {
        let best = self.asks.first().ok_or_else(|| ClientError::EmptyBook {
            side: "ask",
            currency: self.currency.clone(),
        })?;
        Ok(MinAsk {
            price: best.price,
            amount: best.amount,
            currency: self.currency.clone(),
        })
    }

    pub fn max_bid(&self) -> Result<MaxBid, ClientError> {
        let best = self.bids.first().ok_or_else(|| ClientError::EmptyBook {
            side: "bid",
            currency: self.currency.clone(),
        })?;
        Ok(MaxBid {
            price: best.price,
            amount: best.amount,
            currency: self.currency.clone(),
        })
    }
}

/*----- */
// MinAsk / MaxBid
/*----- */
// Degenerate single-offer summaries of the book extremes.
#[derive(Debug, Clone, PartialEq)]
pub struct MinAsk {
    pub price: f64,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaxBid {
    pub price: f64,
    pub amount: f64,
    pub currency: String,
}
