//! Basic usage examples for LedgerTx

use ledgertx::prelude::*;
use solana_sdk::signature::Keypair;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== LedgerTx Basic Usage Examples ===\n");

    // Example 1: Building a simple transaction
    example_basic_transaction()?;

    // Example 2: A chain of transactions from one builder
    example_transaction_chain()?;

    // Example 3: Options loaded from TOML
    example_config()?;

    // Example 4: Rejected builds
    example_preconditions()?;

    Ok(())
}

fn example_basic_transaction() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Building a Basic Transaction");
    println!("----------------------------------------");

    let source = Keypair::new();
    let options = BuilderOptions::new().timeout(600).memo("coffee");
    let mut builder = TransactionBuilder::with_options(&source, 1, options)?;

    let transaction = builder
        .add_operation(Operation::bump_sequence(10))
        .build()?;

    println!("✓ Transaction created");
    println!("  Source: {}", transaction.source_account);
    println!("  Sequence: {}", transaction.seq_num);
    println!("  Fee: {}", transaction.fee);
    println!("  Memo: {:?}", transaction.memo);
    println!(
        "  Hash: {:02x?}",
        transaction.hash(&Network::testnet())?
    );
    println!();

    Ok(())
}

fn example_transaction_chain() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Transaction Chain");
    println!("----------------------------");

    let source = Keypair::new();
    let mut builder = TransactionBuilder::new(&source, 100)?;
    builder.set_timeout(0)?;

    for bump_to in 1..=3 {
        let transaction = builder
            .clear_operations()
            .add_operation(Operation::bump_sequence(bump_to))
            .build()?;
        println!(
            "  seq {} -> {} operation(s), fee {}",
            transaction.seq_num,
            transaction.operation_count(),
            transaction.fee
        );
    }
    println!("  next sequence number: {}", builder.sequence_number());
    println!();

    Ok(())
}

fn example_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Options from TOML");
    println!("----------------------------");

    let options = BuilderOptions::from_toml_str(
        r#"
        base_fee = 200
        memo = ["id", 42]

        [validity]
        timeout = 300
        "#,
    )?;
    let builder = TransactionBuilder::with_options(&Keypair::new(), 1, options)?;

    println!("  Base fee: {}", builder.base_fee());
    println!("  Memo: {:?}", builder.memo());
    println!("  Window: {:?}", builder.time_bounds());
    println!();

    Ok(())
}

fn example_preconditions() -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: Rejected Builds");
    println!("--------------------------");

    let mut builder = TransactionBuilder::new(&Keypair::new(), 1)?;
    match builder.build() {
        Err(err) => println!("  without a window: {}", err),
        Ok(_) => println!("  unexpected success"),
    }

    let expired = BuilderOptions::new().time_bounds(TimeBounds::new(0, 1));
    let mut builder = TransactionBuilder::with_options(&Keypair::new(), 1, expired)?;
    match builder.build() {
        Err(err) => println!("  expired window: {}", err),
        Ok(_) => println!("  unexpected success"),
    }
    println!();

    Ok(())
}
