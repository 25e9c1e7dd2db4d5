use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::TradingError;
use crate::exchange::traits::FuturesExchange;
use crate::models::order::OrderRequest;

/// A scriptable mock implementation of [`FuturesExchange`] for tests.
///
/// Records every request it receives. Responses are served from a scripted
/// queue; once the queue is empty every call succeeds with a synthetic
/// filled-order payload.
pub struct MockExchange {
    requests: Mutex<Vec<OrderRequest>>,
    scripted: Mutex<VecDeque<Result<serde_json::Value, TradingError>>>,
    counter: Mutex<u64>,
}

impl MockExchange {
    pub fn new() -> Self {
        MockExchange {
            requests: Mutex::new(Vec::new()),
            scripted: Mutex::new(VecDeque::new()),
            counter: Mutex::new(0),
        }
    }

    /// Queue responses for the next calls, in order.
    pub fn with_responses(
        responses: Vec<Result<serde_json::Value, TradingError>>,
    ) -> Self {
        let exchange = MockExchange::new();
        *exchange.scripted.lock().unwrap() = responses.into();
        exchange
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn fill_payload(&self, request: &OrderRequest) -> serde_json::Value {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        json!({
            "orderId": *counter,
            "symbol": request.symbol,
            "side": request.side.as_str(),
            "type": request.kind.as_str(),
            "executedQty": request.quantity.to_string(),
            "status": "FILLED",
        })
    }
}

impl Default for MockExchange {
    fn default() -> Self {
        MockExchange::new()
    }
}

#[async_trait]
impl FuturesExchange for MockExchange {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<serde_json::Value, TradingError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(response) = self.scripted.lock().unwrap().pop_front() {
            return response;
        }
        Ok(self.fill_payload(request))
    }
}
