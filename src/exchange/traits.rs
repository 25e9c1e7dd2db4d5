use async_trait::async_trait;

use crate::error::TradingError;
use crate::models::order::OrderRequest;

/// The single order-placement entry point the adapter depends on.
///
/// Implemented by the real Binance futures connector and by mock exchanges
/// used in tests. The success payload is the exchange's raw JSON response,
/// treated as opaque by everything above this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FuturesExchange: Send + Sync {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<serde_json::Value, TradingError>;
}
