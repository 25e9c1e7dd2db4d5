//! The order-placement adapter.
//!
//! Wraps an exchange client behind one execution path that logs a symmetric
//! request/response pair for every call and normalizes every failure into an
//! [`OrderOutcome::Error`]. The only errors the adapter itself returns are
//! precondition violations detected before any network interaction.

use std::time::{Duration, Instant};

use crate::error::TradingError;
use crate::exchange::traits::FuturesExchange;
use crate::models::order::{OrderRequest, OrderSide};
use crate::models::outcome::OrderOutcome;
use crate::twap;

pub struct BasicBot<E: FuturesExchange> {
    exchange: E,
}

impl<E: FuturesExchange> BasicBot<E> {
    pub fn new(exchange: E) -> Self {
        BasicBot { exchange }
    }

    /// Borrow the underlying exchange client.
    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: f64,
    ) -> Result<OrderOutcome, TradingError> {
        let request = OrderRequest::market(symbol, side, quantity)?;
        Ok(self.execute("place_market_order", &request).await)
    }

    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: f64,
        price: f64,
    ) -> Result<OrderOutcome, TradingError> {
        let request = OrderRequest::limit(symbol, side, quantity, price)?;
        Ok(self.execute("place_limit_order", &request).await)
    }

    pub async fn place_stop_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: f64,
        price: f64,
        stop_price: f64,
    ) -> Result<OrderOutcome, TradingError> {
        let request = OrderRequest::stop_limit(symbol, side, quantity, price, stop_price)?;
        Ok(self.execute("place_stop_limit_order", &request).await)
    }

    /// Execute one logical order as `slices` market orders spaced by
    /// `interval`, one outcome per slice in execution order.
    ///
    /// A failed slice does not halt the plan; every slice is submitted and
    /// its outcome recorded. Only the slice-count and quantity preconditions
    /// are fatal, and they fail before any order is issued.
    pub async fn place_twap(
        &self,
        symbol: &str,
        side: OrderSide,
        total_quantity: f64,
        slices: usize,
        interval: Duration,
    ) -> Result<Vec<OrderOutcome>, TradingError> {
        let quantities = twap::slice_quantities(total_quantity, slices)?;
        let mut results = Vec::with_capacity(slices);
        for (i, quantity) in quantities.iter().enumerate() {
            log::info!(
                "TWAP slice {}/{} placing market order qty={}",
                i + 1,
                slices,
                quantity
            );
            let request = OrderRequest::market(symbol, side, *quantity)?;
            results.push(self.execute("place_market_order", &request).await);
            if i + 1 < slices {
                tokio::time::sleep(interval).await;
            }
        }
        Ok(results)
    }

    /// Single execution path shared by every order kind: log the request,
    /// time the call, log the response, and fold any failure into an
    /// error outcome instead of propagating it.
    async fn execute(&self, method: &str, request: &OrderRequest) -> OrderOutcome {
        log::info!("Request -> {}: {}", method, request.log_fields());
        let start = Instant::now();
        match self.exchange.create_order(request).await {
            Ok(payload) => {
                log::info!(
                    "Response <- {}: elapsed_s={:.4} result={}",
                    method,
                    start.elapsed().as_secs_f64(),
                    payload
                );
                OrderOutcome::Success(payload)
            }
            Err(TradingError::ExchangeError(message)) => {
                log::error!("Exchange rejection in {}: {}", method, message);
                OrderOutcome::Error { error: message }
            }
            Err(err) => {
                log::error!("Unexpected error in {}: {}", method, err);
                log::debug!("Diagnostic: {:?}", err);
                OrderOutcome::Error {
                    error: err.to_string(),
                }
            }
        }
    }
}
