use std::collections::HashMap;
use std::fmt;

use crate::{
    config::{CommissionRate, Credentials},
    error::ClientError,
    exchange::{
        request_builder::{MtGoxAuthParams, MtGoxRequestBuilder},
        requests::{
            address::AddressRequest, cancel_order::CancelOrderRequest, depth::DepthRequest,
            get_orders::GetOrdersRequest, info::InfoRequest, new_order::PlaceOrder,
            ticker::TickerRequest, trades::TradesRequest, withdraw::WithdrawRequest,
        },
        MtGoxHttpParser, MTGOX_BASE_URL,
    },
    model::{
        balance,
        offer::{Ask, Bid},
        order::{Buy, CancelTarget, Sell, Trade},
        order_book::{MaxBid, MinAsk, OfferBook},
        order_ledger::{self, OrderLedger},
        ticker::Ticker,
    },
    protocols::http::client::RestClient,
};

/*----- */
// MtGoxClient
/*----- */
#[derive(Debug)]
pub struct MtGoxClient {
    rest_client: RestClient<MtGoxHttpParser, MtGoxRequestBuilder>,
    commission: CommissionRate,
}

impl MtGoxClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::build_client(Some(credentials))
    }

    // Public market data only; private endpoints fail with a credentials
    // error.
    pub fn public() -> Self {
        Self::build_client(None)
    }

    fn build_client(credentials: Option<Credentials>) -> Self {
        let auth = credentials.map(MtGoxAuthParams::new);
        Self {
            rest_client: RestClient::new(
                MTGOX_BASE_URL,
                MtGoxHttpParser,
                MtGoxRequestBuilder::new(auth),
            ),
            commission: CommissionRate::default(),
        }
    }

    pub fn with_commission(mut self, commission: CommissionRate) -> Self {
        self.commission = commission;
        self
    }

    // The rate to feed `Ask::effective_price` / `Bid::effective_price`.
    pub fn commission(&self) -> CommissionRate {
        self.commission
    }

    /*----- */
    // Public market data
    /*----- */
    pub async fn ticker(&self, currency: &str) -> Result<Ticker, ClientError> {
        let response = self.rest_client.execute(TickerRequest::new(currency)).await?;
        Ok(Ticker::from_raw(response.ticker, currency))
    }

    // Both sides of the book in one round trip.
    pub async fn offer_book(&self, currency: &str) -> Result<OfferBook, ClientError> {
        let depth = self.rest_client.execute(DepthRequest::new(currency)).await?;
        OfferBook::from_depth(depth, currency)
    }

    pub async fn asks(&self, currency: &str) -> Result<Vec<Ask>, ClientError> {
        Ok(self.offer_book(currency).await?.asks)
    }

    pub async fn bids(&self, currency: &str) -> Result<Vec<Bid>, ClientError> {
        Ok(self.offer_book(currency).await?.bids)
    }

    pub async fn min_ask(&self, currency: &str) -> Result<MinAsk, ClientError> {
        self.offer_book(currency).await?.min_ask()
    }

    pub async fn max_bid(&self, currency: &str) -> Result<MaxBid, ClientError> {
        self.offer_book(currency).await?.max_bid()
    }

    pub async fn trades(&self, currency: &str) -> Result<Vec<Trade>, ClientError> {
        let raws = self.rest_client.execute(TradesRequest::new(currency)).await?;
        Ok(Trade::from_feed(raws, currency))
    }

    /*----- */
    // Account
    /*----- */
    pub async fn balance(&self) -> Result<HashMap<String, f64>, ClientError> {
        let response = self.rest_client.execute(InfoRequest).await?;
        Ok(balance::from_wallets(response))
    }

    pub async fn deposit_address(&self) -> Result<String, ClientError> {
        let response = self.rest_client.execute(AddressRequest).await?;
        Ok(response.addr)
    }

    /*----- */
    // Order lifecycle
    /*----- */
    pub async fn orders(&self) -> Result<OrderLedger, ClientError> {
        let response = self.rest_client.execute(GetOrdersRequest).await?;
        Ok(OrderLedger::from_raw(response.orders))
    }

    pub async fn buys(&self) -> Result<Vec<Buy>, ClientError> {
        Ok(self.orders().await?.buys)
    }

    pub async fn sells(&self) -> Result<Vec<Sell>, ClientError> {
        Ok(self.orders().await?.sells)
    }

    pub async fn place_buy(
        &self,
        amount: f64,
        price: f64,
        currency: &str,
    ) -> Result<OrderLedger, ClientError> {
        let response = self
            .rest_client
            .execute(PlaceOrder::buy(amount, price, currency))
            .await?;
        Ok(OrderLedger::from_raw(response.orders))
    }

    pub async fn place_sell(
        &self,
        amount: f64,
        price: f64,
        currency: &str,
    ) -> Result<OrderLedger, ClientError> {
        let response = self
            .rest_client
            .execute(PlaceOrder::sell(amount, price, currency))
            .await?;
        Ok(OrderLedger::from_raw(response.orders))
    }

    // Descriptor mode: the request carries exactly the target's id and type.
    pub async fn cancel(&self, target: CancelTarget) -> Result<OrderLedger, ClientError> {
        let response = self
            .rest_client
            .execute(CancelOrderRequest::from(target))
            .await?;
        Ok(OrderLedger::from_raw(response.orders))
    }

    // Identifier mode: look the order up in the current remote list first.
    // Best effort, not atomic: the order can be filled or cancelled between
    // the lookup and the cancel request, in which case the service's own
    // error response is surfaced.
    pub async fn cancel_by_id(&self, id: impl fmt::Display) -> Result<OrderLedger, ClientError> {
        let id = id.to_string();
        let response = self.rest_client.execute(GetOrdersRequest).await?;
        let target = order_ledger::find_cancel_target(&response.orders, &id)
            .ok_or_else(ClientError::order_not_found)?;
        self.cancel(target).await
    }

    /*----- */
    // Funds
    /*----- */
    pub async fn withdraw(
        &self,
        amount: f64,
        address: &str,
    ) -> Result<HashMap<String, f64>, ClientError> {
        let response = self
            .rest_client
            .execute(WithdrawRequest::new(amount, address))
            .await?;
        Ok(balance::from_wallets(response))
    }
}
