//! Simplified Binance USDT-M futures trading bot.
//!
//! Provides market, limit, stop-limit and TWAP order placement through a
//! single logging-and-error-normalizing adapter over the futures order
//! endpoint. Execution failures never propagate past the adapter; they come
//! back as `{error: message}` results the caller inspects.

pub mod bot;
pub mod config;
pub mod credentials;
pub mod error;
pub mod exchange;
pub mod models;
pub mod twap;
pub mod utils;

pub use crate::bot::BasicBot;
pub use crate::error::TradingError;
pub use crate::exchange::traits::FuturesExchange;
pub use crate::models::order::{OrderKind, OrderRequest, OrderSide};
pub use crate::models::outcome::OrderOutcome;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, TradingError>;
