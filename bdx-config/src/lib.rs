use once_cell::sync::Lazy;

/// Number of decimal places between one atomic unit and one BDX.
/// e.g. 9 => 10^9 = 1000000000 atomic units per coin.
pub const COIN_UNIT_PLACES: u32 = 9;

/// Minimum number of confirmations for a transaction to show as confirmed.
pub const TX_MIN_CONFIRMS: u64 = 2;

/// Ticker symbol.
pub const COIN_SYMBOL: &str = "BDX";

/// Scopes OpenAlias DNS lookups to this currency.
pub const OPEN_ALIAS_PREFIX: &str = "bdx";

/// Display name of the currency.
pub const COIN_NAME: &str = "Beldex";

/// Payment URI scheme.
/// Kept in sync with `OPEN_ALIAS_PREFIX` by hand.
pub const COIN_URI_PREFIX: &str = "beldex:";

/// Dust threshold in atomic units, as a decimal literal.
/// 2*10^9 is used for choosing outputs/change. It is parsed into a BigInt
/// so that comparisons never depend on the platform word size.
pub const DUST_THRESHOLD: &str = "2000000000";

/// Unlock times below this value are block heights,
/// anything at or above it is a unix timestamp.
pub const MAX_BLOCK_NUMBER: u64 = 500_000_000;

/// Average block time in seconds, used for unlock time estimation.
pub const AVG_BLOCK_TIME: u64 = 30;

/// Process-wide coin configuration, built on first access.
pub static CONFIG: Lazy<config::CoinConfig> = Lazy::new(|| {
    let config = config::CoinConfig::beldex();
    tracing::debug!(
        symbol = config.coin_symbol(),
        name = config.coin_name(),
        "coin configuration loaded"
    );
    config
});

pub fn config() -> &'static config::CoinConfig {
    &CONFIG
}

pub mod config;
pub use bigdecimal::num_bigint::BigInt;
pub use config::CoinConfig;
