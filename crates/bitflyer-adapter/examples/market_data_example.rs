/*
[INPUT]:  Product code (e.g., "BTC_JPY")
[OUTPUT]: Market data (markets, ticker, board, recent executions)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitflyer_adapter::*;

/// Example: Query market data (no API key required)
#[tokio::main]
async fn main() {
    println!("=== bitFlyer Market Data Example ===\n");

    let client = match BitflyerClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let product_code = DEFAULT_PRODUCT_CODE;

    println!("Listing markets...");
    match client.get_markets().await {
        Ok(markets) => println!("✓ Markets: {}", markets),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", product_code);
    match client.get_ticker(product_code).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying board for {}...", product_code);
    match client.get_board(product_code).await {
        Ok(board) => println!("✓ Mid price: {}", board["mid_price"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last 5 executions for {}...", product_code);
    match client.get_executions(product_code, Pagination::new(5)).await {
        Ok(executions) => println!("✓ Executions: {}", executions),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
