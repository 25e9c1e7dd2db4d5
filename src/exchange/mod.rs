pub mod binance_futures;
pub mod mock;
pub mod traits;
