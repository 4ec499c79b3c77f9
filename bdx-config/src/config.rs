use bigdecimal::num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::{
    AVG_BLOCK_TIME, COIN_NAME, COIN_SYMBOL, COIN_UNIT_PLACES, COIN_URI_PREFIX, DUST_THRESHOLD,
    MAX_BLOCK_NUMBER, OPEN_ALIAS_PREFIX, TX_MIN_CONFIRMS,
};

/// Currency constants used by the wallet client.
///
/// Fields are only reachable through accessors, so a record can't be
/// changed once it has been built:
///
/// ```compile_fail
/// let mut config = bdx_config::CoinConfig::beldex();
/// config.coin_unit_places = 12;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinConfig {
    coin_unit_places: u32,
    tx_min_confirms: u64,
    coin_symbol: &'static str,
    open_alias_prefix: &'static str,
    coin_name: &'static str,
    coin_uri_prefix: &'static str,
    #[serde(serialize_with = "serialize_decimal")]
    dust_threshold: BigInt,
    max_block_number: u64,
    avg_block_time: u64,
}

impl CoinConfig {
    pub fn beldex() -> Self {
        let dust_threshold = BigInt::parse_bytes(DUST_THRESHOLD.as_bytes(), 10)
            .expect("Can't parse DUST_THRESHOLD as BigInt");

        CoinConfig {
            coin_unit_places: COIN_UNIT_PLACES,
            tx_min_confirms: TX_MIN_CONFIRMS,
            coin_symbol: COIN_SYMBOL,
            open_alias_prefix: OPEN_ALIAS_PREFIX,
            coin_name: COIN_NAME,
            coin_uri_prefix: COIN_URI_PREFIX,
            dust_threshold,
            max_block_number: MAX_BLOCK_NUMBER,
            avg_block_time: AVG_BLOCK_TIME,
        }
    }

    pub fn coin_unit_places(&self) -> u32 {
        self.coin_unit_places
    }

    pub fn tx_min_confirms(&self) -> u64 {
        self.tx_min_confirms
    }

    pub fn coin_symbol(&self) -> &'static str {
        self.coin_symbol
    }

    pub fn open_alias_prefix(&self) -> &'static str {
        self.open_alias_prefix
    }

    pub fn coin_name(&self) -> &'static str {
        self.coin_name
    }

    pub fn coin_uri_prefix(&self) -> &'static str {
        self.coin_uri_prefix
    }

    pub fn dust_threshold(&self) -> &BigInt {
        &self.dust_threshold
    }

    pub fn max_block_number(&self) -> u64 {
        self.max_block_number
    }

    /// Seconds.
    pub fn avg_block_time(&self) -> u64 {
        self.avg_block_time
    }
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self::beldex()
    }
}

// JSON numbers can't be trusted with arbitrary precision.
fn serialize_decimal<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dust_literal_parses() {
        let dust = BigInt::parse_bytes(DUST_THRESHOLD.as_bytes(), 10).unwrap();
        assert_eq!(&dust, CoinConfig::beldex().dust_threshold());
    }

    #[test]
    fn record_holds_only_constants() {
        let json = serde_json::to_value(CoinConfig::beldex()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            [
                "avgBlockTime",
                "coinName",
                "coinSymbol",
                "coinUnitPlaces",
                "coinUriPrefix",
                "dustThreshold",
                "maxBlockNumber",
                "openAliasPrefix",
                "txMinConfirms",
            ]
        );
    }
}
