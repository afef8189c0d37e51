//! Default display-asset providers, in probe order.

use crate::domain::entities::resolved_asset::TokenIdentity;
use crate::domain::values::asset_source::AssetSource;

/// Served when no provider has an image for the identity.
pub const FALLBACK_ASSET_URL: &str = "https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/128/color/generic.png";

/// Hand-maintained logo URLs for tokens the public icon sets miss or get wrong.
const BACKUP_LOGOS: &[(&str, &str)] = &[
    ("BTC", "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"),
    ("ETH", "https://assets.coingecko.com/coins/images/279/large/ethereum.png"),
    ("SOL", "https://assets.coingecko.com/coins/images/4128/large/solana.png"),
    ("USDC", "https://assets.coingecko.com/coins/images/6319/large/usdc.png"),
    ("USDT", "https://assets.coingecko.com/coins/images/325/large/Tether.png"),
    ("BONK", "https://assets.coingecko.com/coins/images/28600/large/bonk.jpg"),
    ("WIF", "https://assets.coingecko.com/coins/images/33566/large/dogwifhat.jpg"),
    ("PEPE", "https://assets.coingecko.com/coins/images/29850/large/pepe-token.jpeg"),
    ("JUP", "https://assets.coingecko.com/coins/images/34188/large/jup.png"),
];

fn evm_address(identity: &TokenIdentity) -> Option<String> {
    identity
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| a.len() == 42 && a.starts_with("0x"))
        .map(str::to_lowercase)
}

fn symbol_slug(identity: &TokenIdentity) -> Option<String> {
    let slug = identity.symbol.trim().to_lowercase();
    if slug.is_empty() || !slug.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(slug)
}

fn trustwallet_chain(chain: &str) -> Option<&'static str> {
    match chain.to_lowercase().as_str() {
        "ethereum" | "eth" => Some("ethereum"),
        "bsc" | "binance" | "smartchain" => Some("smartchain"),
        "solana" | "sol" => Some("solana"),
        "polygon" | "matic" => Some("polygon"),
        "arbitrum" => Some("arbitrum"),
        "base" => Some("base"),
        "avalanche" | "avax" => Some("avalanchec"),
        _ => None,
    }
}

fn oneinch_url(identity: &TokenIdentity) -> Option<String> {
    evm_address(identity).map(|addr| format!("https://tokens.1inch.io/{addr}.png"))
}

fn trustwallet_url(identity: &TokenIdentity) -> Option<String> {
    let chain = trustwallet_chain(identity.chain.as_deref()?)?;
    let address = identity.address.as_deref().map(str::trim).filter(|a| !a.is_empty())?;
    Some(format!(
        "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/{chain}/assets/{address}/logo.png"
    ))
}

fn spothq_url(identity: &TokenIdentity) -> Option<String> {
    symbol_slug(identity).map(|s| {
        format!("https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/128/color/{s}.png")
    })
}

fn cryptoicons_url(identity: &TokenIdentity) -> Option<String> {
    symbol_slug(identity).map(|s| format!("https://cryptoicons.org/api/icon/{s}/200"))
}

fn backup_url(identity: &TokenIdentity) -> Option<String> {
    let symbol = identity.symbol.trim().to_uppercase();
    BACKUP_LOGOS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, url)| url.to_string())
}

pub fn default_sources() -> Vec<AssetSource> {
    vec![
        AssetSource::new("1inch", 10, oneinch_url),
        AssetSource::new("trustwallet", 20, trustwallet_url),
        AssetSource::new("spothq", 30, spothq_url),
        AssetSource::new("cryptoicons", 40, cryptoicons_url),
        AssetSource::new("backup", 90, backup_url),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_ascending_and_unique() {
        let sources = default_sources();
        for pair in sources.windows(2) {
            assert!(pair[0].priority < pair[1].priority);
        }
    }

    #[test]
    fn test_address_sources_skip_symbol_only_identity() {
        let identity = TokenIdentity::new("BONK");
        let sources = default_sources();
        let oneinch = sources.iter().find(|s| s.name == "1inch").unwrap();
        let trust = sources.iter().find(|s| s.name == "trustwallet").unwrap();
        assert!(oneinch.url_for(&identity).is_none());
        assert!(trust.url_for(&identity).is_none());
    }

    #[test]
    fn test_url_shapes() {
        let identity = TokenIdentity::new("PEPE")
            .with_address("0x6982508145454Ce325dDbE47a25d4ec3d2311933")
            .with_chain("ethereum");
        assert_eq!(
            oneinch_url(&identity).unwrap(),
            "https://tokens.1inch.io/0x6982508145454ce325ddbe47a25d4ec3d2311933.png"
        );
        assert!(trustwallet_url(&identity)
            .unwrap()
            .contains("/blockchains/ethereum/assets/0x6982508145454Ce325dDbE47a25d4ec3d2311933/"));
        assert!(spothq_url(&identity).unwrap().ends_with("/pepe.png"));
        assert!(backup_url(&identity).is_some());
    }

    #[test]
    fn test_odd_symbols_skip_symbol_sources() {
        let identity = TokenIdentity::new("$WEIRD/1");
        assert!(spothq_url(&identity).is_none());
        assert!(cryptoicons_url(&identity).is_none());
        assert!(backup_url(&identity).is_none());
    }
}
