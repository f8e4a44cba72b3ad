//! Integration tests for `ShopifyAdminClient`.
//!
//! Uses `wiremock` to stand up a local Admin API for each test so no real
//! network traffic is made.

use agsync_core::{parse_weight, Location};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agsync_shopify::{CatalogError, ShopifyAdminClient};

const API: &str = "/admin/api/2024-04";

fn test_client(server: &MockServer) -> ShopifyAdminClient {
    ShopifyAdminClient::new(&server.uri(), "test-token", "2024-04")
        .expect("failed to build test ShopifyAdminClient")
}

fn variants_json(variants: &[(i64, Option<&str>)]) -> serde_json::Value {
    let variants: Vec<_> = variants
        .iter()
        .map(|(id, sku)| {
            json!({
                "id": id,
                "product_id": 900,
                "title": "Default Title",
                "sku": sku,
                "inventory_item_id": id * 100
            })
        })
        .collect();
    json!({ "variants": variants })
}

// ---------------------------------------------------------------------------
// Location resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_location_skips_legacy_and_fulfillment_locations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [
                {"id": 1, "name": "Old POS", "legacy": true, "fulfillment_service": null},
                {"id": 2, "name": "3PL", "legacy": false, "fulfillment_service": "shipbob"},
                {"id": 3, "name": "Warehouse", "legacy": false},
                {"id": 4, "name": "Shopfront", "legacy": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let location = test_client(&server)
        .resolve_location()
        .await
        .expect("a qualifying location exists");

    assert_eq!(
        location,
        Location {
            id: 3,
            name: "Warehouse".to_owned()
        }
    );
}

#[tokio::test]
async fn resolve_location_fails_when_nothing_qualifies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [
                {"id": 1, "name": "Old POS", "legacy": true},
                {"id": 2, "name": "3PL", "legacy": false, "fulfillment_service": "shipbob"}
            ]
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).resolve_location().await.unwrap_err();
    assert!(
        matches!(err, CatalogError::NoLocationAvailable { considered: 2 }),
        "expected NoLocationAvailable, got: {err:?}"
    );
}

#[tokio::test]
async fn resolve_location_reports_endpoint_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/locations.json")))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let err = test_client(&server).resolve_location().await.unwrap_err();
    match err {
        CatalogError::LocationsUnavailable { source } => match *source {
            CatalogError::UnexpectedStatus { status, body, .. } => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid API key");
            }
            other => panic!("expected UnexpectedStatus source, got: {other:?}"),
        },
        other => panic!("expected LocationsUnavailable, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Index build
// ---------------------------------------------------------------------------

#[tokio::test]
async fn build_index_single_page_drops_variants_without_sku() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variants_json(&[
            (1, Some("A1")),
            (2, None),
            (3, Some("")),
            (4, Some("B2")),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let index = test_client(&server).build_index(250).await.unwrap();

    assert_eq!(index.len(), 2);
    let a1 = index.get("A1").expect("A1 indexed");
    assert_eq!(a1.variant_id, 1);
    assert_eq!(a1.inventory_item_id, 100);
    assert!(index.get("B2").is_some());
}

#[tokio::test]
async fn build_index_follows_next_links_until_absent() {
    let server = MockServer::start().await;
    let page_url =
        |cursor: &str| format!("{}{API}/variants.json?limit=2&page_info={cursor}", server.uri());

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variants_json(&[(1, Some("A1")), (2, Some("DUP"))]))
                .insert_header("Link", format!("<{}>; rel=\"next\"", page_url("p2")).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page_two_link = format!(
        "<{}>; rel=\"previous\", <{}>; rel=\"next\"",
        page_url("p1"),
        page_url("p3")
    );
    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param("page_info", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variants_json(&[(3, Some("B2")), (4, None)]))
                .insert_header("Link", page_two_link.as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param("page_info", "p3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variants_json(&[(5, Some("DUP")), (6, Some("C3"))]))
                .insert_header(
                    "Link",
                    format!("<{}>; rel=\"previous\"", page_url("p2")).as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let index = test_client(&server).build_index(2).await.unwrap();

    assert_eq!(index.len(), 4, "A1, DUP, B2, C3");
    assert_eq!(
        index.get("DUP").map(|v| v.variant_id),
        Some(5),
        "duplicate SKU on a later page must win"
    );
    assert_eq!(index.get("C3").map(|v| v.inventory_item_id), Some(600));
}

#[tokio::test]
async fn build_index_is_all_or_nothing_when_a_page_fails() {
    let server = MockServer::start().await;
    let next = format!(
        "<{}{API}/variants.json?limit=250&page_info=p2>; rel=\"next\"",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variants_json(&[(1, Some("A1"))]))
                .insert_header("Link", next.as_str()),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .and(query_param("page_info", "p2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server).build_index(250).await.unwrap_err();
    match err {
        CatalogError::CatalogUnavailable { page, source } => {
            assert_eq!(page, 2);
            assert!(
                matches!(*source, CatalogError::UnexpectedStatus { status: 503, .. }),
                "expected 503 source, got: {source:?}"
            );
        }
        other => panic!("expected CatalogUnavailable, got: {other:?}"),
    }
}

#[tokio::test]
async fn build_index_rejects_malformed_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/variants.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).build_index(250).await.unwrap_err();
    match err {
        CatalogError::CatalogUnavailable { page, source } => {
            assert_eq!(page, 1);
            assert!(matches!(*source, CatalogError::Deserialize { .. }));
        }
        other => panic!("expected CatalogUnavailable, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_inventory_level_posts_overwrite() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(body_json(json!({
            "location_id": 77,
            "inventory_item_id": 100,
            "available": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inventory_level": {}})))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server)
        .set_inventory_level(77, 100, 0)
        .await
        .expect("inventory set should succeed");
}

#[tokio::test]
async fn update_variant_weight_sends_kilograms() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{API}/variants/12.json")))
        .and(body_json(json!({
            "variant": {"id": 12, "weight": 2.5, "weight_unit": "kg"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"variant": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let weight = parse_weight("2.5kg").unwrap();
    test_client(&server)
        .update_variant_weight(12, &weight)
        .await
        .expect("weight update should succeed");
}

#[tokio::test]
async fn update_inventory_item_barcode_sends_barcode() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{API}/inventory_items/1200.json")))
        .and(body_json(json!({
            "inventory_item": {"id": 1200, "barcode": "9312345678907"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inventory_item": {}})))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server)
        .update_inventory_item_barcode(1200, "9312345678907")
        .await
        .expect("barcode update should succeed");
}

#[tokio::test]
async fn mutation_failure_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{API}/inventory_levels/set.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string(r#"{"errors":["Inventory item does not have inventory tracking enabled"]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .set_inventory_level(77, 100, 5)
        .await
        .unwrap_err();
    match err {
        CatalogError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 422);
            assert!(body.contains("inventory tracking"));
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}
