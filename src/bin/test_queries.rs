/// Manual test program for the read-only query surface
/// Run with: cargo run --bin test_queries

use anyhow::Result;
use brickken_client::BrickkenProtocolClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let contract_address = "neutron1tlszjwhg83eqax0se6ys5thv8ceeuje46dk4tfwc4ahzdxxqrz5qug8e6j";
    let rpc_endpoint = "https://rpc-palvus.pion-1.ntrn.tech:443";

    println!("=== Brickken Protocol Query Test ===\n");
    println!("Contract: {}", contract_address);
    println!("RPC: {}\n", rpc_endpoint);

    println!("Creating read-only client...");
    let client = BrickkenProtocolClient::connect(rpc_endpoint, contract_address).await?;
    println!("Connected. Can sign: {}\n", client.can_sign());

    println!("=== Counter / Owner / Description ===");
    match client.get_count().await {
        Ok(count) => println!("Current count: {}", count),
        Err(e) => println!("get_count failed: {}", e),
    }

    match client.get_owner().await {
        Ok(owner) => println!("Contract owner: {}", owner),
        Err(e) => println!("get_owner failed: {}", e),
    }

    match client.get_description().await {
        Ok(description) => println!("Description: {}", description),
        Err(e) => println!("get_description failed: {}", e),
    }
    println!();

    println!("=== Oracle Prices ===");
    match client.get_usdt_price_band().await {
        Ok(price) => {
            println!("Band Protocol USDT price:");
            println!("  Price: {}", price.price);
            println!("  Symbol: {}", price.symbol);
            println!("  Oracle: {}", price.oracle);
            println!("  Last updated: {}", price.last_updated);
        }
        Err(e) => println!("Band Protocol query failed: {}", e),
    }

    match client.get_usdt_price_pyth().await {
        Ok(price) => {
            println!("Pyth Network USDT price:");
            println!("  Price: {}", price.price);
            println!("  Symbol: {}", price.symbol);
            println!("  Oracle: {}", price.oracle);
            println!("  Last updated: {}", price.last_updated);
        }
        Err(e) => println!("Pyth Network query failed: {}", e),
    }

    println!("\n=== Query Test Complete ===");
    Ok(())
}
