//! In-process stand-in for the Tehnomir API.
//!
//! Routes every vendor path, checks `apiToken` in the JSON body and answers
//! with canned vendor-shaped payloads: quoted numbers, `"-"` placeholders and
//! both timestamp layouts included. A few endpoints echo part of the request
//! so concurrent callers can tell their answers apart.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{post, MethodRouter},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const DEFAULT_TOKEN: &str = "test-token";

/// The only basket id `basket/delete` accepts.
pub const KNOWN_BASKET_ID: i64 = 311;

const PRICE_SEARCH: &str = include_str!("../fixtures/price_search.json");
const ORDER_CREATE: &str = include_str!("../fixtures/order_create.json");
const ACK: &str = include_str!("../fixtures/ack.json");

/// Endpoints answered with a fixed fixture.
const FIXTURES: &[(&str, &str)] = &[
    ("/price/getStockPrice", include_str!("../fixtures/stock_price.json")),
    ("/unload/search", include_str!("../fixtures/unloads.json")),
    ("/unload/getData", include_str!("../fixtures/unload_data.json")),
    ("/unload/getBoxesReadyToSend", include_str!("../fixtures/boxes_ready.json")),
    ("/info/getSuppliers", include_str!("../fixtures/suppliers.json")),
    ("/info/getBrands", include_str!("../fixtures/brands.json")),
    ("/info/getBrandGroups", include_str!("../fixtures/brand_groups.json")),
    ("/info/getProductInfo", include_str!("../fixtures/product_info.json")),
    ("/info/getCurrencies", include_str!("../fixtures/currencies.json")),
    ("/info/getBrandsByCode", include_str!("../fixtures/brands_by_code.json")),
    ("/info/getPositionStatuses", include_str!("../fixtures/position_statuses.json")),
    ("/basket/add", include_str!("../fixtures/basket_add.json")),
    ("/basket/getPositions", include_str!("../fixtures/basket_positions.json")),
    ("/basket/clear", ACK),
    ("/order/getPositionInfo", include_str!("../fixtures/positions.json")),
    ("/order/getActive", include_str!("../fixtures/orders.json")),
    ("/order/search", include_str!("../fixtures/orders.json")),
    ("/order/getChangedPositions", include_str!("../fixtures/positions.json")),
    ("/order/getOrderPositions", include_str!("../fixtures/positions.json")),
    ("/order/getOrderPositionsByStatus", include_str!("../fixtures/positions.json")),
];

#[derive(Debug, Clone)]
pub struct MockState {
    pub token: String,
}

type Shared = Arc<MockState>;

pub fn app(token: &str) -> Router {
    let state = Arc::new(MockState {
        token: token.to_string(),
    });

    let mut router = Router::new()
        .route("/test/connect", post(test_connect))
        .route("/price/search", post(price_search))
        .route("/order/create", post(order_create))
        .route("/basket/delete", post(basket_delete));
    for &(path, fixture) in FIXTURES {
        router = router.route(path, fixture_route(fixture));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

/// Vendor error envelope, as sent with a non-200 status.
pub fn error_body(status: StatusCode, name: &str, message: &str) -> Value {
    json!({
        "success": false,
        "data": {
            "name": name,
            "message": message,
            "code": 0,
            "status": status.as_u16(),
        }
    })
}

fn authorize(state: &MockState, body: &Value) -> Result<(), Response> {
    match body.get("apiToken").and_then(Value::as_str) {
        Some(token) if token == state.token => Ok(()),
        _ => {
            tracing::debug!("rejecting request with bad token");
            let body = error_body(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Your request was made with invalid credentials.",
            );
            Err((StatusCode::UNAUTHORIZED, Json(body)).into_response())
        }
    }
}

fn raw_json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

fn fixture_route(body: &'static str) -> MethodRouter<Shared> {
    post(move |State(state): State<Shared>, Json(request): Json<Value>| async move {
        match authorize(&state, &request) {
            Ok(()) => raw_json(body),
            Err(rejection) => rejection,
        }
    })
}

async fn test_connect(State(state): State<Shared>, Json(request): Json<Value>) -> Response {
    if let Err(rejection) = authorize(&state, &request) {
        return rejection;
    }
    let phrase = request.get("string").cloned().unwrap_or_else(|| json!(""));
    Json(json!({"success": true, "data": {"testString": phrase}})).into_response()
}

/// Answers with the canned detail, relabelled with the requested code.
async fn price_search(State(state): State<Shared>, Json(request): Json<Value>) -> Response {
    if let Err(rejection) = authorize(&state, &request) {
        return rejection;
    }
    let code = request.get("code").cloned().unwrap_or_else(|| json!(""));
    let mut answer = fixture(PRICE_SEARCH);
    if let Some(details) = answer["data"].as_array_mut() {
        for detail in details {
            detail["code"] = code.clone();
        }
    }
    Json(answer).into_response()
}

async fn order_create(State(state): State<Shared>, Json(request): Json<Value>) -> Response {
    if let Err(rejection) = authorize(&state, &request) {
        return rejection;
    }
    let number = request.get("orderNumber").cloned().unwrap_or_else(|| json!(""));
    let mut answer = fixture(ORDER_CREATE);
    answer["data"]["orderNumber"] = number;
    Json(answer).into_response()
}

/// Unknown baskets get `200` with `success: false` and no data.
async fn basket_delete(State(state): State<Shared>, Json(request): Json<Value>) -> Response {
    if let Err(rejection) = authorize(&state, &request) {
        return rejection;
    }
    match request.get("basketId").and_then(Value::as_i64) {
        Some(KNOWN_BASKET_ID) => raw_json(ACK),
        _ => Json(json!({"success": false})).into_response(),
    }
}

async fn not_found() -> Response {
    let body = error_body(StatusCode::NOT_FOUND, "Not Found", "Page not found.");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
