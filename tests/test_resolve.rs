//! Tests for multi-source asset resolution.

mod common;

use common::*;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tokenscope::domain::entities::resolved_asset::{TokenIdentity, FALLBACK_SOURCE};
use tokenscope::domain::ports::source_probe::ProbeResponse;
use tokenscope::domain::values::asset_source::AssetSource;
use tokenscope::infrastructure::asset_sources::FALLBACK_ASSET_URL;
use tokenscope::infrastructure::sources::MockCandidateSource;
use tokenscope::{Components, TokenScope};

const ONEINCH_PEPE: &str = "https://tokens.1inch.io/0x6982508145454ce325ddbe47a25d4ec3d2311933.png";
const SPOTHQ_PEPE: &str = "https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/128/color/pepe.png";

fn pepe() -> TokenIdentity {
    TokenIdentity::new("PEPE")
        .with_address("0x6982508145454ce325ddbe47a25d4ec3d2311933")
        .with_chain("ethereum")
}

fn scope_with_probe(probe: Arc<ScriptedProbe>) -> TokenScope {
    scope_with(Arc::new(MockCandidateSource::new()), probe)
}

fn scope_with_sources(probe: Arc<ScriptedProbe>, sources: Vec<AssetSource>) -> TokenScope {
    let config = test_config();
    let mut components = Components::new(&config, Arc::new(MockCandidateSource::new()), probe, Arc::new(FixedOracle(false)));
    components.asset_sources = sources;
    TokenScope::with_components(&config, components)
}

#[tokio::test]
async fn test_first_accepted_source_wins() {
    let probe = Arc::new(
        ScriptedProbe::default()
            .with(ONEINCH_PEPE, ProbeResponse::image("image/png"))
            .with(SPOTHQ_PEPE, ProbeResponse::image("image/png")),
    );
    let scope = scope_with_probe(probe.clone());

    let asset = scope.resolve(&pepe()).await;
    assert_eq!(asset.source, "1inch");
    assert_eq!(asset.url, ONEINCH_PEPE);
    assert!(!asset.from_cache);
    assert!(!asset.is_fallback());
    assert_eq!(probe.called(), vec![ONEINCH_PEPE.to_string()]);
}

#[tokio::test]
async fn test_non_image_response_rejected() {
    let probe = Arc::new(
        ScriptedProbe::default()
            .with(
                ONEINCH_PEPE,
                ProbeResponse {
                    success: true,
                    content_type: Some("text/html".into()),
                },
            )
            .with(SPOTHQ_PEPE, ProbeResponse::image("image/png")),
    );
    let scope = scope_with_probe(probe.clone());

    let asset = scope.resolve(&pepe()).await;
    assert_eq!(asset.source, "spothq");
    assert_eq!(asset.url, SPOTHQ_PEPE);
    // 1inch rejected, trustwallet 404, then spothq
    assert_eq!(probe.call_count(), 3);
}

#[tokio::test]
async fn test_sources_needing_address_are_skipped() {
    let probe = Arc::new(ScriptedProbe::default().with(SPOTHQ_PEPE, ProbeResponse::image("image/png")));
    let scope = scope_with_probe(probe.clone());

    let asset = scope.resolve(&TokenIdentity::new("PEPE")).await;
    assert_eq!(asset.source, "spothq");
    // no address: 1inch and trustwallet never probed
    assert_eq!(probe.called(), vec![SPOTHQ_PEPE.to_string()]);
}

#[tokio::test]
async fn test_unresolvable_identity_probes_once() {
    let probe = Arc::new(DownProbe::default());
    let scope = scope_with(Arc::new(MockCandidateSource::new()), probe.clone());
    let identity = TokenIdentity::new("NOPE").with_address("0x0000000000000000000000000000000000000001");

    let first = scope.resolve(&identity).await;
    let probes_after_first = probe.calls.load(Ordering::SeqCst);
    let second = scope.resolve(&identity).await;

    assert!(probes_after_first > 0);
    assert_eq!(probe.calls.load(Ordering::SeqCst), probes_after_first);

    assert_eq!(first.source, FALLBACK_SOURCE);
    assert_eq!(first.url, FALLBACK_ASSET_URL);
    assert!(!first.from_cache);
    assert_eq!(second.source, FALLBACK_SOURCE);
    assert!(second.from_cache);
}

#[tokio::test]
async fn test_cache_hit_skips_probes() {
    let probe = Arc::new(ScriptedProbe::default().with(ONEINCH_PEPE, ProbeResponse::image("image/png")));
    let scope = scope_with_probe(probe.clone());

    scope.resolve(&pepe()).await;
    let again = scope.resolve(&pepe()).await;

    assert!(again.from_cache);
    assert_eq!(again.source, "1inch");
    assert_eq!(probe.call_count(), 1);
    assert_eq!(scope.resolution_cache_len(), 1);
}

#[tokio::test]
async fn test_clear_forces_reprobe() {
    let probe = Arc::new(ScriptedProbe::default().with(ONEINCH_PEPE, ProbeResponse::image("image/png")));
    let scope = scope_with_probe(probe.clone());

    scope.resolve(&pepe()).await;
    scope.clear_resolution_cache();
    assert_eq!(scope.resolution_cache_len(), 0);
    let fresh = scope.resolve(&pepe()).await;

    assert!(!fresh.from_cache);
    assert_eq!(probe.call_count(), 2);
}

#[tokio::test]
async fn test_slow_probe_does_not_stall_chain() {
    let probe = Arc::new(
        ScriptedProbe::default()
            .slow(ONEINCH_PEPE)
            .with(SPOTHQ_PEPE, ProbeResponse::image("image/png")),
    );
    let scope = scope_with_probe(probe);

    let started = Instant::now();
    let asset = scope.resolve(&pepe()).await;
    assert_eq!(asset.source, "spothq");
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_priority_order_not_declaration_order() {
    fn first(identity: &TokenIdentity) -> Option<String> {
        Some(format!("https://first/{}.png", identity.symbol))
    }
    fn second(identity: &TokenIdentity) -> Option<String> {
        Some(format!("https://second/{}.png", identity.symbol))
    }

    let probe = Arc::new(
        ScriptedProbe::default()
            .with("https://first/ABC.png", ProbeResponse::image("image/png"))
            .with("https://second/ABC.png", ProbeResponse::image("image/png")),
    );
    let scope = scope_with_sources(
        probe,
        vec![AssetSource::new("second", 20, second), AssetSource::new("first", 10, first)],
    );

    let asset = scope.resolve(&TokenIdentity::new("ABC")).await;
    assert_eq!(asset.source, "first");
}

#[tokio::test]
async fn test_html_from_every_source_ends_in_fallback() {
    let html = ProbeResponse {
        success: true,
        content_type: Some("text/html; charset=utf-8".into()),
    };
    let probe = Arc::new(
        ScriptedProbe::default()
            .with(
                "https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/128/color/zzz.png",
                html.clone(),
            )
            .with("https://cryptoicons.org/api/icon/zzz/200", html),
    );
    let scope = scope_with_probe(probe.clone());

    let asset = scope.resolve(&TokenIdentity::new("ZZZ")).await;
    assert!(asset.is_fallback());
    assert_eq!(asset.source, FALLBACK_SOURCE);
    assert_eq!(asset.url, FALLBACK_ASSET_URL);
    assert_eq!(probe.call_count(), 2);

    let again = scope.resolve(&TokenIdentity::new("ZZZ")).await;
    assert!(again.from_cache);
    assert!(again.is_fallback());
}

#[tokio::test]
async fn test_untyped_success_rejected() {
    fn plain(identity: &TokenIdentity) -> Option<String> {
        Some(format!("https://plain/{}", identity.symbol))
    }

    let probe = Arc::new(ScriptedProbe::default().with(
        "https://plain/XYZ",
        ProbeResponse {
            success: true,
            content_type: None,
        },
    ));
    let scope = scope_with_sources(probe, vec![AssetSource::new("plain", 1, plain)]);

    let asset = scope.resolve(&TokenIdentity::new("XYZ")).await;
    assert!(asset.is_fallback());
}

#[tokio::test]
async fn test_concurrent_resolutions() {
    let probe = Arc::new(ScriptedProbe::default().with(ONEINCH_PEPE, ProbeResponse::image("image/png")));
    let scope = Arc::new(scope_with_probe(probe));

    let a = {
        let scope = scope.clone();
        tokio::spawn(async move { scope.resolve(&pepe()).await })
    };
    let b = {
        let scope = scope.clone();
        tokio::spawn(async move { scope.resolve(&TokenIdentity::new("NOPE")).await })
    };
    let c = {
        let scope = scope.clone();
        tokio::spawn(async move { scope.resolve(&pepe()).await })
    };

    let (a, b, c) = (a.await.unwrap(), b.await.unwrap(), c.await.unwrap());
    assert_eq!(a.url, ONEINCH_PEPE);
    assert_eq!(c.url, ONEINCH_PEPE);
    assert!(b.is_fallback());
    assert_eq!(scope.resolution_cache_len(), 2);
}
