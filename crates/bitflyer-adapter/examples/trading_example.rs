/*
[INPUT]:  BITFLYER_API_KEY / BITFLYER_API_SECRET environment variables
[OUTPUT]: Balance, an order acceptance id and its cancellation
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use bitflyer_adapter::*;
use rust_decimal::Decimal;

/// Example: Trading operations (requires an API key with trade permission)
///
/// Places a far-from-market limit order and cancels it again.
#[tokio::main]
async fn main() {
    println!("=== bitFlyer Trading Example ===\n");

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("BITFLYER_API_KEY"),
        std::env::var("BITFLYER_API_SECRET"),
    ) else {
        eprintln!("Set BITFLYER_API_KEY and BITFLYER_API_SECRET to run this example");
        return;
    };

    let client = match BitflyerClient::new() {
        Ok(c) => c.with_credentials(Credentials::new(api_key, api_secret)),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    let order = NewChildOrder::limit(
        DEFAULT_PRODUCT_CODE,
        Side::Buy,
        Decimal::new(1_000_000, 0),
        Decimal::new(1, 3),
    )
    .with_minute_to_expire(1);
    println!("\nSending {:?}", order);

    let acceptance_id = match client.send_child_order(&order).await {
        Ok(response) => match response["child_order_acceptance_id"].as_str() {
            Some(id) => id.to_string(),
            None => {
                println!("✗ Order rejected: {}", response);
                return;
            }
        },
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Accepted: {}", acceptance_id);

    match client
        .cancel_child_order(DEFAULT_PRODUCT_CODE, &OrderRef::acceptance_id(acceptance_id))
        .await
    {
        Ok(_) => println!("✓ Cancelled"),
        Err(e) => println!("✗ Cancel failed: {}", e),
    }

    println!("\n✓ Trading example complete");
}
