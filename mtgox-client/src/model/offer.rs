use crate::{
    config::CommissionRate, error::ClientError, exchange::requests::depth::RawDepthLevel,
};

/*----- */
// Ask
/*----- */
// A sell-side resting offer in the public book.
#[derive(Debug, Clone, PartialEq)]
pub struct Ask {
    pub price: f64,
    pub amount: f64,
    pub currency: String,
}

impl Ask {
    pub fn new(price: f64, amount: f64, currency: impl Into<String>) -> Result<Self, ClientError> {
        validate_offer(price, amount)?;
        Ok(Self {
            price,
            amount,
            currency: currency.into(),
        })
    }

    pub fn from_level(level: RawDepthLevel, currency: &str) -> Result<Self, ClientError> {
        Self::new(level.price, level.amount, currency)
    }

    // Actual cost per unit once the exchange takes its cut.
    pub fn effective_price(&self, commission: CommissionRate) -> f64 {
        self.price * (1.0 + commission.0)
    }
}

/*----- */
// Bid
/*----- */
// A buy-side resting offer in the public book.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub price: f64,
    pub amount: f64,
    pub currency: String,
}

impl Bid {
    pub fn new(price: f64, amount: f64, currency: impl Into<String>) -> Result<Self, ClientError> {
        validate_offer(price, amount)?;
        Ok(Self {
            price,
            amount,
            currency: currency.into(),
        })
    }

    pub fn from_level(level: RawDepthLevel, currency: &str) -> Result<Self, ClientError> {
        Self::new(level.price, level.amount, currency)
    }

    // Actual proceeds per unit once the exchange takes its cut.
    pub fn effective_price(&self, commission: CommissionRate) -> f64 {
        self.price * (1.0 - commission.0)
    }
}

fn validate_offer(price: f64, amount: f64) -> Result<(), ClientError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ClientError::ParsingError(format!(
            "invalid offer price: {price}"
        )));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ClientError::ParsingError(format!(
            "invalid offer amount: {amount}"
        )));
    }
    Ok(())
}
