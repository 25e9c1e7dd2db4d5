use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TradingError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OrderSide {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl OrderSide {
    /// Wire representation expected by the futures order endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = TradingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(TradingError::InvalidParameter(format!(
                "side must be BUY or SELL, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OrderKind {
    #[serde(rename = "MARKET")]
    Market,
    #[serde(rename = "LIMIT")]
    Limit,
    #[serde(rename = "STOP")]
    StopLimit,
}

impl OrderKind {
    /// Wire representation; Binance futures calls a stop-limit order `STOP`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit => "LIMIT",
            OrderKind::StopLimit => "STOP",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated order-placement request.
///
/// Built only through [`OrderRequest::market`], [`OrderRequest::limit`] and
/// [`OrderRequest::stop_limit`] so that price and stop price are present
/// exactly when the order kind requires them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<&'static str>,
}

impl OrderRequest {
    pub fn market(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: f64,
    ) -> Result<Self, TradingError> {
        require_positive(quantity, "quantity")?;
        Ok(OrderRequest {
            symbol: symbol.into(),
            side,
            kind: OrderKind::Market,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        })
    }

    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: f64,
        price: f64,
    ) -> Result<Self, TradingError> {
        require_positive(quantity, "quantity")?;
        require_positive(price, "price")?;
        Ok(OrderRequest {
            symbol: symbol.into(),
            side,
            kind: OrderKind::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
            time_in_force: Some("GTC"),
        })
    }

    pub fn stop_limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: f64,
        price: f64,
        stop_price: f64,
    ) -> Result<Self, TradingError> {
        require_positive(quantity, "quantity")?;
        require_positive(price, "price")?;
        require_positive(stop_price, "stop price")?;
        Ok(OrderRequest {
            symbol: symbol.into(),
            side,
            kind: OrderKind::StopLimit,
            quantity,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force: Some("GTC"),
        })
    }

    /// JSON rendering of the request parameters, used for request logging.
    pub fn log_fields(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

fn require_positive(value: f64, field: &str) -> Result<(), TradingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TradingError::InvalidParameter(format!(
            "{} must be > 0, got {}",
            field, value
        )))
    }
}
