//! Adapter behavior against the mock exchange: uniform outcome shape,
//! request construction, and precondition handling.

use serde_json::json;

use futures_bot::bot::BasicBot;
use futures_bot::exchange::mock::MockExchange;
use futures_bot::models::order::{OrderKind, OrderSide};
use futures_bot::TradingError;

#[tokio::test]
async fn market_order_returns_raw_payload() {
    let bot = BasicBot::new(MockExchange::new());

    let outcome = bot
        .place_market_order("BTCUSDT", OrderSide::Buy, 0.5)
        .await
        .unwrap();

    assert!(outcome.is_success());
    let payload = outcome.payload().unwrap();
    assert_eq!(payload["symbol"], "BTCUSDT");
    assert_eq!(payload["type"], "MARKET");
    assert_eq!(payload["status"], "FILLED");
}

#[tokio::test]
async fn requests_carry_the_expected_fields() {
    let exchange = MockExchange::new();
    let bot = BasicBot::new(exchange);

    bot.place_stop_limit_order("BTCUSDT", OrderSide::Sell, 0.25, 49000.0, 49500.0)
        .await
        .unwrap();
    bot.place_limit_order("BTCUSDT", OrderSide::Buy, 0.5, 48000.0)
        .await
        .unwrap();
    bot.place_market_order("BTCUSDT", OrderSide::Buy, 1.0)
        .await
        .unwrap();

    let requests = bot.exchange().requests();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].kind, OrderKind::StopLimit);
    assert_eq!(requests[0].price, Some(49000.0));
    assert_eq!(requests[0].stop_price, Some(49500.0));
    assert_eq!(requests[0].time_in_force, Some("GTC"));

    assert_eq!(requests[1].kind, OrderKind::Limit);
    assert_eq!(requests[1].price, Some(48000.0));
    assert_eq!(requests[1].stop_price, None);
    assert_eq!(requests[1].time_in_force, Some("GTC"));

    assert_eq!(requests[2].kind, OrderKind::Market);
    assert_eq!(requests[2].price, None);
    assert_eq!(requests[2].time_in_force, None);
}

#[tokio::test]
async fn exchange_rejection_is_returned_as_data() {
    let exchange = MockExchange::with_responses(vec![Err(TradingError::ExchangeError(
        "Insufficient margin".to_string(),
    ))]);
    let bot = BasicBot::new(exchange);

    let outcome = bot
        .place_market_order("BTCUSDT", OrderSide::Buy, 100.0)
        .await
        .unwrap();

    assert_eq!(outcome.error_message(), Some("Insufficient margin"));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({"error": "Insufficient margin"})
    );
}

#[tokio::test]
async fn invalid_parameters_fail_before_any_request() {
    let exchange = MockExchange::new();
    let bot = BasicBot::new(exchange);

    let err = bot
        .place_limit_order("BTCUSDT", OrderSide::Buy, 1.0, 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, TradingError::InvalidParameter(_)));
    assert_eq!(bot.exchange().request_count(), 0);
}
