//! Command-line surface for the futures bot.
//!
//! Flags mirror the order operations; omitting `--symbol` drops into an
//! interactive prompt flow. Credentials come from flags, the environment, a
//! `.env` file, or a prompt, in that order.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use futures_bot::bot::BasicBot;
use futures_bot::exchange::binance_futures::BinanceFuturesExchange;
use futures_bot::exchange::traits::FuturesExchange;
use futures_bot::models::order::OrderSide;
use futures_bot::models::outcome::OrderOutcome;
use futures_bot::utils::logging;
use futures_bot::{config, credentials};

#[derive(Parser, Debug)]
#[command(name = "futures-bot", version)]
#[command(about = "Binance USDT-M futures trading CLI (testnet by default)")]
struct Cli {
    /// API key (or BINANCE_API_KEY, or .env)
    #[arg(long)]
    api_key: Option<String>,

    /// API secret (or BINANCE_API_SECRET, or .env)
    #[arg(long)]
    api_secret: Option<String>,

    /// Trading pair symbol, e.g. BTCUSDT; prompts interactively when omitted
    #[arg(long)]
    symbol: Option<String>,

    /// Order side
    #[arg(long, value_enum)]
    side: Option<SideArg>,

    /// Order type
    #[arg(long = "type", value_enum, default_value = "market")]
    order_type: OrderTypeArg,

    /// Quantity to trade
    #[arg(long)]
    quantity: Option<f64>,

    /// Price for limit and stop-limit orders
    #[arg(long)]
    price: Option<f64>,

    /// Stop price for stop-limit orders
    #[arg(long)]
    stop_price: Option<f64>,

    /// Number of TWAP slices
    #[arg(long, default_value_t = 5)]
    slices: usize,

    /// Seconds to wait between TWAP slices
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// Use the futures testnet endpoint
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    testnet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for OrderSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => OrderSide::Buy,
            SideArg::Sell => OrderSide::Sell,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderTypeArg {
    Market,
    Limit,
    StopLimit,
    Twap,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted by user");
            Ok(())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (api_key, api_secret) =
        credentials::resolve(cli.api_key.clone(), cli.api_secret.clone()).await?;
    let exchange =
        BinanceFuturesExchange::new(config::base_url(cli.testnet), api_key, api_secret);
    log::info!("Initialized bot (testnet={})", cli.testnet);
    let bot = BasicBot::new(exchange);

    match cli.symbol.clone() {
        Some(symbol) => dispatch(&bot, &cli, symbol.trim().to_uppercase()).await,
        None => interactive_flow(&bot).await,
    }
}

async fn dispatch<E: FuturesExchange>(bot: &BasicBot<E>, cli: &Cli, symbol: String) -> Result<()> {
    let side: OrderSide = cli.side.map(Into::into).unwrap_or(OrderSide::Buy);

    match cli.order_type {
        OrderTypeArg::Market => {
            let quantity = cli
                .quantity
                .context("--quantity is required for a market order")?;
            let outcome = bot.place_market_order(&symbol, side, quantity).await?;
            print_outcome(&outcome)
        }
        OrderTypeArg::Limit => {
            let quantity = cli
                .quantity
                .context("--quantity is required for a limit order")?;
            let price = cli.price.context("--price is required for a limit order")?;
            let outcome = bot.place_limit_order(&symbol, side, quantity, price).await?;
            print_outcome(&outcome)
        }
        OrderTypeArg::StopLimit => {
            let quantity = cli
                .quantity
                .context("--quantity is required for a stop-limit order")?;
            let price = cli
                .price
                .context("--price is required for a stop-limit order")?;
            let stop_price = cli
                .stop_price
                .context("--stop-price is required for a stop-limit order")?;
            let outcome = bot
                .place_stop_limit_order(&symbol, side, quantity, price, stop_price)
                .await?;
            print_outcome(&outcome)
        }
        OrderTypeArg::Twap => {
            let quantity = cli.quantity.context("--quantity is required for TWAP")?;
            println!(
                "Starting TWAP: slices={} interval={}s",
                cli.slices, cli.interval
            );
            let outcomes = bot
                .place_twap(
                    &symbol,
                    side,
                    quantity,
                    cli.slices,
                    Duration::from_secs(cli.interval),
                )
                .await?;
            print_outcomes(&outcomes)
        }
    }
}

async fn interactive_flow<E: FuturesExchange>(bot: &BasicBot<E>) -> Result<()> {
    println!("\n=== Binance Futures Trading Bot ===\n");
    let symbol = prompt("Symbol (e.g., BTCUSDT): ").await?.to_uppercase();
    let side: OrderSide = prompt("Side (BUY/SELL): ").await?.parse()?;
    println!("Order Types:\n1. Market\n2. Limit\n3. Stop-Limit\n4. TWAP");
    let choice = prompt("Select (1/2/3/4): ").await?;
    let quantity = prompt_number("Quantity: ").await?;

    match choice.as_str() {
        "1" => {
            let outcome = bot.place_market_order(&symbol, side, quantity).await?;
            print_outcome(&outcome)
        }
        "2" => {
            let price = prompt_number("Limit price: ").await?;
            let outcome = bot.place_limit_order(&symbol, side, quantity, price).await?;
            print_outcome(&outcome)
        }
        "3" => {
            let price = prompt_number("Limit price: ").await?;
            let stop_price = prompt_number("Stop price: ").await?;
            let outcome = bot
                .place_stop_limit_order(&symbol, side, quantity, price, stop_price)
                .await?;
            print_outcome(&outcome)
        }
        "4" => {
            let slices = prompt("TWAP slices (e.g., 5): ")
                .await?
                .parse::<usize>()
                .context("slice count must be a whole number")?;
            let interval = prompt("Interval seconds between slices (e.g., 1): ")
                .await?
                .parse::<u64>()
                .context("interval must be a whole number of seconds")?;
            let outcomes = bot
                .place_twap(&symbol, side, quantity, slices, Duration::from_secs(interval))
                .await?;
            print_outcomes(&outcomes)
        }
        other => anyhow::bail!("invalid choice '{}'", other),
    }
}

/// Read one line from stdin on the blocking thread pool, so the ctrl-c
/// branch of the top-level select stays pollable while a prompt waits.
async fn prompt(message: &str) -> Result<String> {
    let message = message.to_string();
    let line = tokio::task::spawn_blocking(move || -> Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    })
    .await??;
    Ok(line)
}

async fn prompt_number(message: &str) -> Result<f64> {
    prompt(message)
        .await?
        .parse::<f64>()
        .context("expected a number")
}

fn print_outcome(outcome: &OrderOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn print_outcomes(outcomes: &[OrderOutcome]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}
