//! Check command implementation.
//!
//! Validates the effective configuration, reaches the stats socket, and
//! parses one snapshot end to end, reporting counts. Exits non-zero through
//! the caller on any failure.

use crate::config::{validate_effective_config, Config};
use hastatus::{classify_table, fetch_snapshot, parse_stat_table, statuses};

/// Validates configuration and performs one full fetch-parse-classify pass.
pub fn command_check(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 hastatus - Snapshot Check");
    println!("============================");

    println!("\n⚙️  Checking configuration...");
    validate_effective_config(config)?;
    println!("   ✅ Configuration valid");
    println!("   socket: {}", config.socket_path().display());
    match config.timeout() {
        Some(t) => println!("   timeout: {}ms", t.as_millis()),
        None => println!("   timeout: none (blocking)"),
    }

    println!("\n🔌 Fetching snapshot...");
    let blob = fetch_snapshot(&config.socket_path(), config.timeout())?;
    println!("   ✅ Received {} bytes", blob.len());

    println!("\n📊 Parsing and classifying...");
    let table = parse_stat_table(&blob)?;
    println!(
        "   ✅ Parsed {} rows across {} columns",
        table.len(),
        table.columns().len()
    );

    let entities = classify_table(&table)?;
    let servers = entities.iter().filter(|e| e.is_server()).count();
    let active = entities.iter().filter(|e| e.is_active()).count();
    let map = statuses(&entities);
    println!(
        "   ✅ Classified {} entities: {} proxy groups, {} servers ({} active)",
        entities.len(),
        map.len(),
        servers,
        active
    );

    println!("\n✅ All checks passed");
    Ok(())
}
