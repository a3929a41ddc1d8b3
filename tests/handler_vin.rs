mod common;

use axum::Router;
use axum_test::TestServer;
use vin_decoder::api::routes::vin_routes;

fn server() -> TestServer {
    let app = Router::new()
        .nest("/api", vin_routes())
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_lookup_known_vin() {
    let response = server()
        .get(&format!("/api/vin/{}", common::VW_VIN))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["vin"], common::VW_VIN);
    assert_eq!(json["status"], "decoded");

    let record = &json["record"];
    assert_eq!(record["manufacturer"], "Volkswagen");
    assert_eq!(record["country_of_origin"], "Germany");
    assert_eq!(record["region"], "europe");
    assert_eq!(record["production_year"], 1999);
    assert_eq!(record["version"], "2.0");
    assert_eq!(record["fuel_type"], "petrol");
    assert_eq!(record["displacement_cc"], 2000);
    assert_eq!(record["power_hp"], 150);
    assert_eq!(record["disabled_adapted"], false);
}

#[tokio::test]
async fn test_lookup_unknown_manufacturer_is_not_an_error() {
    let response = server()
        .get(&format!("/api/vin/{}", common::UNKNOWN_WMI_VIN))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "not_found");
    assert!(json["record"].is_null());
}

#[tokio::test]
async fn test_lookup_invalid_vin() {
    let response = server().get("/api/vin/SHORT123").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["reason"], "length");
    assert_eq!(json["error"]["details"]["length"], 8);
}

#[tokio::test]
async fn test_lookup_rejects_lowercase() {
    let response = server().get("/api/vin/wvwzzz1jzxw000001").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["reason"], "character");
    assert_eq!(json["error"]["details"]["position"], 0);
}

#[tokio::test]
async fn test_lookup_reference_year_override() {
    let response = server()
        .get(&format!("/api/vin/{}", common::VW_VIN))
        .add_query_param("reference_year", 2030)
        .await;

    response.assert_status_ok();

    // 'X' decodes to 2029 once the reference year reaches it
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["record"]["production_year"], 2029);
}

#[tokio::test]
async fn test_lookup_reference_year_out_of_range() {
    let response = server()
        .get(&format!("/api/vin/{}", common::VW_VIN))
        .add_query_param("reference_year", 1900)
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_lookup_is_deterministic() {
    let server = server();
    let path = format!("/api/vin/{}", common::BMW_VIN);

    let first = server.get(&path).await.json::<serde_json::Value>();
    let second = server.get(&path).await.json::<serde_json::Value>();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_validate_valid_vin() {
    let response = server()
        .get(&format!("/api/vin/{}/validate", common::VW_VIN))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["vin"], common::VW_VIN);
    assert_eq!(json["valid"], true);
    assert_eq!(json["formatted"], "WVW-ZZZ1JZ-XW000001");
}

#[tokio::test]
async fn test_validate_invalid_vin() {
    let response = server().get("/api/vin/WVWZZZ1JZXW00000O/validate").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["valid"], false);
    assert_eq!(json["formatted"], "WVW-ZZZ1JZ-XW00000O");
}

#[tokio::test]
async fn test_unknown_api_path_returns_json_not_found() {
    let response = server().get("/api/vins").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["method"], "GET");
    assert_eq!(json["error"]["details"]["path"], "/api/vins");
}
