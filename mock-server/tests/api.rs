use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tehnomir_mock::{app, DEFAULT_TOKEN, KNOWN_BASKET_ID};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn post(uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn authed(uri: &str, mut body: Value) -> Request<String> {
    body["apiToken"] = json!(DEFAULT_TOKEN);
    post(uri, body)
}

// --- auth ---

#[tokio::test]
async fn wrong_token_is_401_envelope() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(post("/info/getBrands", json!({"apiToken": "nope"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], 401);
    assert_eq!(body["data"]["name"], "Unauthorized");
}

#[tokio::test]
async fn missing_token_is_401() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(post("/test/connect", json!({"string": "hi"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn custom_token_is_honoured() {
    let resp = app("other")
        .oneshot(post("/info/getCurrencies", json!({"apiToken": "other"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app("other")
        .oneshot(authed("/info/getCurrencies", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- echoes ---

#[tokio::test]
async fn test_connect_echoes_phrase() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/test/connect", json!({"string": "ping-42"})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"success": true, "data": {"testString": "ping-42"}}));
}

#[tokio::test]
async fn price_search_echoes_code() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed(
            "/price/search",
            json!({"brandId": 0, "code": "W71275", "isShowAnalogs": 1, "currency": "USD"}),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let details = body["data"].as_array().unwrap();
    assert!(!details.is_empty());
    assert!(details.iter().all(|d| d["code"] == "W71275"));
    assert_eq!(details[0]["rests"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn order_create_echoes_number() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/order/create", json!({"orderNumber": "A-19"})))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["orderNumber"], "A-19");
    assert_eq!(body["data"]["orderId"], 903);
}

// --- basket delete ---

#[tokio::test]
async fn basket_delete_known_id_succeeds() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/basket/delete", json!({"basketId": KNOWN_BASKET_ID})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": true}));
}

#[tokio::test]
async fn basket_delete_unknown_id_reports_failure_with_200() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/basket/delete", json!({"basketId": 999})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"success": false}));
}

// --- fixtures ---

#[tokio::test]
async fn fixture_routes_serve_success_envelopes() {
    for uri in [
        "/price/getStockPrice",
        "/unload/search",
        "/unload/getData",
        "/unload/getBoxesReadyToSend",
        "/info/getSuppliers",
        "/info/getBrands",
        "/info/getBrandGroups",
        "/info/getProductInfo",
        "/info/getCurrencies",
        "/info/getBrandsByCode",
        "/info/getPositionStatuses",
        "/basket/add",
        "/basket/getPositions",
        "/basket/clear",
        "/order/getPositionInfo",
        "/order/getActive",
        "/order/search",
        "/order/getChangedPositions",
        "/order/getOrderPositions",
        "/order/getOrderPositionsByStatus",
    ] {
        let resp = app(DEFAULT_TOKEN)
            .oneshot(authed(uri, json!({})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            resp.headers()[http::header::CONTENT_TYPE],
            "application/json",
            "{uri}"
        );
        let body = body_json(resp).await;
        assert_eq!(body["success"], true, "{uri}");
    }
}

#[tokio::test]
async fn fixtures_keep_vendor_quirks() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/info/getSuppliers", json!({})))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"][0]["deliveryTimeHours"], "-");
    assert_eq!(body["data"][0]["isReturnFlag"], "1");
    assert_eq!(body["data"][1]["isReturnFlag"], true);
}

// --- errors ---

#[tokio::test]
async fn unknown_path_is_404_envelope() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(authed("/info/getNothing", json!({})))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["status"], 404);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/info/getBrands")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body("{not json".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let resp = app(DEFAULT_TOKEN)
        .oneshot(
            Request::builder()
                .uri("/info/getBrands")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
