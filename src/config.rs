//! Endpoint selection and request defaults.

/// Binance USDT-M futures testnet REST endpoint.
pub const TESTNET_URL: &str = "https://testnet.binancefuture.com";

/// Binance USDT-M futures production REST endpoint.
pub const MAINNET_URL: &str = "https://fapi.binance.com";

/// Signed-request receive window in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;

/// Pick the REST base URL for the requested environment.
pub fn base_url(testnet: bool) -> &'static str {
    if testnet {
        TESTNET_URL
    } else {
        MAINNET_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_testnet_endpoint() {
        assert_eq!(base_url(true), TESTNET_URL);
        assert_eq!(base_url(false), MAINNET_URL);
    }
}
