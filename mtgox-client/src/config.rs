use crate::error::ClientError;

pub const MTGOX_API_KEY_ENV: &str = "MTGOX_API_KEY";
pub const MTGOX_API_SECRET_ENV: &str = "MTGOX_API_SECRET";

/*----- */
// Credentials
/*----- */
// API key pair for the private endpoints. The secret is the base64 string
// issued by the exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn from_env() -> Result<Self, ClientError> {
        let key = std::env::var(MTGOX_API_KEY_ENV)
            .map_err(|_| ClientError::Credentials(format!("{MTGOX_API_KEY_ENV} is not set")))?;
        let secret = std::env::var(MTGOX_API_SECRET_ENV)
            .map_err(|_| ClientError::Credentials(format!("{MTGOX_API_SECRET_ENV} is not set")))?;
        Ok(Self { key, secret })
    }
}

/*----- */
// CommissionRate
/*----- */
// Fraction of the price the exchange takes per fill, e.g. 0.0065 for the
// standard 0.65% fee. Passed explicitly wherever an effective price is
// computed so tests can inject arbitrary rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionRate(pub f64);

impl Default for CommissionRate {
    fn default() -> Self {
        CommissionRate(0.0065)
    }
}
