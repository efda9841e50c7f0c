use domain_prices::{PricingCatalog, PricingError};
use httpmock::prelude::*;
use serde_json::json;

fn remote_document() -> serde_json::Value {
    json!({
        "registrar": "namecheap",
        "updated": 1710000000000i64,
        "prices": {
            "com": {
                "tld": "com", "usage": "General",
                "register_price": 10.28, "renew_price": 14.58,
                "transfer_price": 9.58, "restore_price": 75,
                "renew_grace_period": 30, "delete_grace_period": 30,
                "currency": "USD", "privacy": true, "idn": true,
                "restrictions": false
            },
            "dev": {
                "tld": "dev", "usage": "Technology",
                "register_price": 11.98, "renew_price": 15.98,
                "transfer_price": 13.98, "restore_price": 100,
                "renew_grace_period": 30, "delete_grace_period": 30,
                "currency": "USD", "privacy": true, "idn": false,
                "restrictions": false
            }
        }
    })
}

fn seed_catalog() -> PricingCatalog {
    PricingCatalog::from_json(
        r#"{
            "registrar": "dynadot",
            "updated": 1700000000000,
            "prices": {
                "xyz": {
                    "tld": "xyz", "usage": "General",
                    "register_price": 1.99, "renew_price": 11.99,
                    "transfer_price": 10.99, "restore_price": 90,
                    "renew_grace_period": 40, "delete_grace_period": 30,
                    "currency": "USD", "privacy": true, "idn": true,
                    "restrictions": false
                }
            }
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_refresh_replaces_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(remote_document());
    });

    let mut catalog = seed_catalog();
    assert_eq!(catalog.registrar(), "dynadot");

    catalog.refresh(&server.url("/prices.json")).await.unwrap();
    mock.assert();

    assert_eq!(catalog.registrar(), "namecheap");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.updated_at(), 1_710_000_000_000);
    assert!(catalog.contains_tld("dev"));
    assert!(!catalog.contains_tld("xyz"));
}

#[tokio::test]
async fn test_refresh_404_preserves_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/missing.json");
        then.status(404);
    });

    let mut catalog = seed_catalog();
    let before = catalog.document().clone();

    let err = catalog
        .refresh(&server.url("/missing.json"))
        .await
        .unwrap_err();
    mock.assert();

    match err {
        PricingError::FetchError { status, reason } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(catalog.document(), &before);
}

#[tokio::test]
async fn test_refresh_unparseable_body_preserves_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/broken.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("this is not a pricing document");
    });

    let mut catalog = seed_catalog();
    let before = catalog.document().clone();

    let err = catalog
        .refresh(&server.url("/broken.json"))
        .await
        .unwrap_err();
    mock.assert();

    assert!(matches!(err, PricingError::ParseError(_)));
    assert_eq!(catalog.document(), &before);
}

#[tokio::test]
async fn test_refresh_shape_violation_preserves_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/mismatched.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "registrar": "namecheap",
                "updated": 1710000000000i64,
                "prices": {
                    "com": {
                        "tld": "net", "usage": "General",
                        "register_price": 10.28, "renew_price": 14.58,
                        "transfer_price": 9.58, "restore_price": 75,
                        "renew_grace_period": 30, "delete_grace_period": 30,
                        "currency": "USD", "privacy": true, "idn": true,
                        "restrictions": false
                    }
                }
            }));
    });

    let mut catalog = seed_catalog();
    let before = catalog.document().clone();

    let err = catalog
        .refresh(&server.url("/mismatched.json"))
        .await
        .unwrap_err();
    mock.assert();

    assert!(matches!(err, PricingError::DocumentError { .. }));
    assert_eq!(catalog.document(), &before);
}

#[tokio::test]
async fn test_from_remote_builds_working_catalog() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/prices.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(remote_document());
    });

    let catalog = PricingCatalog::from_remote(&server.url("/prices.json")).await?;
    mock.assert();

    assert_eq!(catalog.registrar(), "namecheap");
    let com = catalog.price(".com").unwrap();
    assert_eq!(com.tld, "com");
    assert_eq!(
        catalog.total_cost("com", 2),
        Some("24.86".parse().unwrap())
    );
    Ok(())
}

#[tokio::test]
async fn test_from_remote_404_is_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.json");
        then.status(404);
    });

    let err = PricingCatalog::from_remote(&server.url("/missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, PricingError::FetchError { status: 404, .. }));
}

#[tokio::test]
async fn test_from_remote_rejects_invalid_urls() {
    let err = PricingCatalog::from_remote("ftp://example.com/prices.json")
        .await
        .unwrap_err();
    assert!(matches!(err, PricingError::UrlError { .. }));

    let err = PricingCatalog::from_remote("").await.unwrap_err();
    assert!(matches!(err, PricingError::UrlError { .. }));
}
