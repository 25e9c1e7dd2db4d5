use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::config::DEFAULT_RECV_WINDOW_MS;
use crate::error::TradingError;
use crate::exchange::traits::FuturesExchange;
use crate::models::order::OrderRequest;

type HmacSha256 = Hmac<Sha256>;

/// Binance USDT-M futures REST connector (order placement subset).
pub struct BinanceFuturesExchange {
    base_url: String,
    api_key: String,
    api_secret: String,
    http: reqwest::Client,
}

impl BinanceFuturesExchange {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        BinanceFuturesExchange {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            http: reqwest::Client::new(),
        }
    }

    fn sign(&self, query: &str) -> String {
        // HMAC-SHA256 accepts keys of any length, so this cannot fail.
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes()).unwrap();
        mac.update(query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Signed query string for `/fapi/v1/order`.
    fn order_query(&self, request: &OrderRequest) -> String {
        let mut params = vec![
            format!("symbol={}", request.symbol),
            format!("side={}", request.side.as_str()),
            format!("type={}", request.kind.as_str()),
            format!("quantity={}", request.quantity),
        ];
        if let Some(price) = request.price {
            params.push(format!("price={}", price));
        }
        if let Some(stop_price) = request.stop_price {
            params.push(format!("stopPrice={}", stop_price));
        }
        if let Some(tif) = request.time_in_force {
            params.push(format!("timeInForce={}", tif));
        }
        params.push(format!("newClientOrderId=fbot-{}", Uuid::new_v4()));
        params.push(format!("recvWindow={}", DEFAULT_RECV_WINDOW_MS));
        params.push(format!(
            "timestamp={}",
            chrono::Utc::now().timestamp_millis()
        ));
        let query = params.join("&");
        let signature = self.sign(&query);
        format!("{}&signature={}", query, signature)
    }
}

#[async_trait]
impl FuturesExchange for BinanceFuturesExchange {
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<serde_json::Value, TradingError> {
        let url = format!("{}/fapi/v1/order?{}", self.base_url, self.order_query(request));
        let response = self
            .http
            .post(url)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        // Binance rejections carry a {"code": i64, "msg": string} body; pass
        // the human-readable message through as the exchange error.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("msg").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status));
        Err(TradingError::ExchangeError(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderSide;

    fn connector() -> BinanceFuturesExchange {
        BinanceFuturesExchange::new("https://example.invalid", "key", "secret")
    }

    #[test]
    fn market_query_omits_price_fields() {
        let request = OrderRequest::market("BTCUSDT", OrderSide::Buy, 0.25).unwrap();
        let query = connector().order_query(&request);
        assert!(query.starts_with("symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.25"));
        assert!(!query.contains("price="));
        assert!(!query.contains("timeInForce="));
        assert!(query.contains("&signature="));
    }

    #[test]
    fn stop_limit_query_carries_stop_price_and_gtc() {
        let request =
            OrderRequest::stop_limit("BTCUSDT", OrderSide::Sell, 0.25, 49000.0, 49500.0).unwrap();
        let query = connector().order_query(&request);
        assert!(query.contains("type=STOP"));
        assert!(query.contains("price=49000"));
        assert!(query.contains("stopPrice=49500"));
        assert!(query.contains("timeInForce=GTC"));
    }

    #[test]
    fn signature_is_deterministic_for_same_query() {
        let c = connector();
        assert_eq!(c.sign("symbol=BTCUSDT"), c.sign("symbol=BTCUSDT"));
        assert_ne!(c.sign("symbol=BTCUSDT"), c.sign("symbol=ETHUSDT"));
    }
}
