//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `storefront_core` linkage.
//! - Print deterministic store statistics for quick local sanity checks.
//!
//! Configuration comes from `STOREFRONT_LOG_LEVEL`, `STOREFRONT_LOG_DIR` and
//! `STOREFRONT_SEED`.

use log::info;
use std::error::Error;
use std::process::ExitCode;
use storefront_core::{init_logging_from_config, StoreConfig, Storefront};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = StoreConfig::from_env()?;
    init_logging_from_config(&config)?;

    let storefront = Storefront::from_config(&config)?;
    let stats = storefront.stats();
    info!(
        "event=cli_stats module=cli status=ok users={} products={} in_stock={}",
        stats.total_users, stats.total_products, stats.products_in_stock
    );

    println!("storefront_core ping={}", storefront_core::ping());
    println!("storefront_core version={}", storefront_core::core_version());
    println!(
        "storefront users={} products={} in_stock={}",
        stats.total_users, stats.total_products, stats.products_in_stock
    );
    for product in storefront.products().get_all_products() {
        println!(
            "product id={} name={} price={} stock={}",
            product.id.unwrap_or_default(),
            product.name,
            product.price,
            product.stock
        );
    }
    Ok(())
}
