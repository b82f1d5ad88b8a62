/// Manual test program for the signing client: queries, counter mutation
/// and oracle address updates against the testnet contract
/// Run with: cargo run --bin test_signing

use anyhow::Result;
use brickken_client::{BrickkenProtocolClient, SigningOptions};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let contract_address = "neutron1e0e4e44watnnsmnvnlsdw5ar6qdjraecc265424wn42r0mq5v5gqgsktm2";
    let rpc_endpoint = "https://rpc-palvus.pion-1.ntrn.tech:443";
    // Throwaway testnet key, do not reuse
    let mnemonic = "bag boat victory dream gospel smooth pulp release rent derive cross cost";

    println!("=== Brickken Protocol Signing Test ===\n");
    println!("Contract: {}", contract_address);
    println!("RPC: {}\n", rpc_endpoint);

    println!("Creating signing client...");
    let client = BrickkenProtocolClient::connect_with_signer(
        rpc_endpoint,
        mnemonic,
        contract_address,
        SigningOptions::default(),
    )
    .await?;

    let sender = client.sender_address().unwrap_or("<none>").to_string();
    println!("Wallet address: {}", sender);
    println!("Can sign: {}\n", client.can_sign());

    println!("=== Queries before executing ===");
    let count = client.get_count().await?;
    println!("Current count: {}", count);
    let owner = client.get_owner().await?;
    println!("Contract owner: {}", owner);
    let description = client.get_description().await?;
    println!("Description: {}\n", description);

    println!("=== Increment ===");
    match client.increment().await {
        Ok(result) => {
            println!("Increment successful!");
            println!("  TX hash: {}", result.transaction_hash);
            println!("  Gas used: {}", result.gas_used);
            let new_count = client.get_count().await?;
            println!("  New count: {}", new_count);
        }
        Err(e) => println!("Increment failed: {}", e),
    }
    println!();

    // Owner-gated operations: the contract rejects non-owner senders,
    // the client submits regardless
    if sender == owner {
        println!("=== Reset (as owner) ===");
        match client.reset(100).await {
            Ok(result) => {
                println!("Reset successful! TX hash: {}", result.transaction_hash);
                println!("Count after reset: {}", client.get_count().await?);
            }
            Err(e) => println!("Reset failed: {}", e),
        }

        println!("\n=== Update description (as owner) ===");
        match client
            .update_description("Brickken Protocol demo contract")
            .await
        {
            Ok(result) => println!("Update successful! TX hash: {}", result.transaction_hash),
            Err(e) => println!("Update failed: {}", e),
        }

        println!("\n=== Oracle address updates (as owner) ===");
        let band_oracle = "neutron1fxw7k6zsrl3w07jqarxxj4sy6dx6cktqn3xlc5zr2n6gvnftrkvq4nflja";
        match client.set_band_oracle_address(band_oracle).await {
            Ok(result) => println!("Band oracle set! TX hash: {}", result.transaction_hash),
            Err(e) => println!("Band oracle update failed: {}", e),
        }

        let pyth_oracle = "neutron16rerygcpahqcxx5t8vjla46ym8ccn7xz7rtc6ju5ujcd36cmc7zs3tvwms";
        match client.set_pyth_oracle_address(pyth_oracle).await {
            Ok(result) => println!("Pyth oracle set! TX hash: {}", result.transaction_hash),
            Err(e) => println!("Pyth oracle update failed: {}", e),
        }
    } else {
        println!("Sender is not the contract owner; skipping owner-gated operations");
    }

    println!("\n=== Signing Test Complete ===");
    Ok(())
}
