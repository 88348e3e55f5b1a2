use std::borrow::Cow;
use std::fmt;

use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::{protocols::http::rest_request::RestRequest, shared::de::FlexibleF64};

/*----- */
// Mt.Gox Depth
/*----- */
#[derive(Debug, Serialize)]
pub struct DepthRequest {
    #[serde(rename = "Currency")]
    currency: String,
}

impl DepthRequest {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl RestRequest for DepthRequest {
    type Response = DepthResponse;
    type QueryParams = Self;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/0/data/getDepth.php")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        Some(self)
    }
}

/*----- */
// Mt.Gox Depth - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct DepthResponse {
    pub asks: Vec<RawDepthLevel>,
    pub bids: Vec<RawDepthLevel>,
}

// One [price, amount] entry of the depth payload. Trailing elements are
// tolerated and ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDepthLevel {
    pub price: f64,
    pub amount: f64,
}

impl<'de> Deserialize<'de> for RawDepthLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawDepthLevelVisitor;

        impl<'de> Visitor<'de> for RawDepthLevelVisitor {
            type Value = RawDepthLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a [price, amount] depth entry")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let price: FlexibleF64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let amount: FlexibleF64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(RawDepthLevel {
                    price: price.0,
                    amount: amount.0,
                })
            }
        }

        deserializer.deserialize_seq(RawDepthLevelVisitor)
    }
}
