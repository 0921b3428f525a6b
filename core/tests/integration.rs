//! End-to-end tests against the live mock vendor.
//!
//! # Design
//! Starts the mock server on a random port, then drives every client
//! operation over real HTTP through the default ureq transport. Checks that
//! envelope building, status handling and lenient decoding line up with what
//! the vendor actually sends.

use std::io::{Read, Write};
use std::net::SocketAddr;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use tehnomir::{ApiError, Config, Currency, Endpoint, TehnomirClient};

fn start_mock() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            tehnomir_mock::run(listener, tehnomir_mock::DEFAULT_TOKEN).await
        })
    });

    addr
}

fn config_for(addr: SocketAddr, token: &str) -> Config {
    Config {
        proto: "http".to_string(),
        host: addr.to_string(),
        ..Config::new(token)
    }
}

fn client(addr: SocketAddr) -> TehnomirClient {
    TehnomirClient::new(config_for(addr, tehnomir_mock::DEFAULT_TOKEN)).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> NaiveDateTime {
    date(y, mo, d).and_hms_micro_opt(h, mi, s, micro).unwrap()
}

#[test]
fn catalog_lookups() {
    let c = client(start_mock());

    c.test_connect(Some("ping")).unwrap();
    c.test_connect(None).unwrap();

    let found = c.search_with_analogs("0 986-452/044", Currency::Usd).unwrap();
    assert_eq!(found.len(), 1);
    let detail = &found[0];
    assert_eq!(detail.code, "0986452044");
    assert_eq!(detail.brand_id, 51);
    assert_eq!(detail.weight.get(), 0.35);
    assert!(!detail.is_original.get());
    assert!(detail.is_exist_product_info.get());

    let [exact, warehouse] = detail.offers.as_slice() else {
        panic!("expected two offers, got {:?}", detail.offers);
    };
    assert_eq!(exact.price.get(), 4.13);
    assert_eq!(exact.quantity.get(), 12);
    assert_eq!(exact.delivery_days, 12);
    assert_eq!(exact.delivery_date.get(), Some(at(2023, 11, 20, 0, 0, 0, 0)));
    assert_eq!(
        exact.price_change_date.get(),
        Some(at(2023, 11, 8, 17, 19, 0, 882_505))
    );
    assert!(exact.is_return.get());
    assert!(!exact.is_price_final.get());

    assert_eq!(warehouse.price.get(), 1004.2);
    assert_eq!(warehouse.quantity.get(), 0);
    assert_eq!(warehouse.price_quality.get(), 80.0);
    assert!(warehouse.delivery_date.is_zero());
    assert!(warehouse.price_change_date.is_zero());
    assert!(!warehouse.is_return.get());
    assert!(warehouse.is_price_final.get());

    let by_brand = c.search_by_brand_with_analogs("W712/75", 301, Currency::Eur).unwrap();
    assert_eq!(by_brand[0].code, "W71275");
    let exact_only = c.search_by_brand_without_analogs("W712/75", 301, Currency::Usd).unwrap();
    assert_eq!(exact_only[0].code, "W71275");

    let stock = c.stock_price().unwrap();
    assert_eq!(stock[0].code_printed, "W 712/75");
    assert_eq!(stock[0].price_for_remote.get(), 4.10);

    let suppliers = c.suppliers().unwrap();
    assert_eq!(suppliers.len(), 2);
    assert_eq!(suppliers[0].delivery_hours.get(), 0);
    assert_eq!(suppliers[1].delivery_hours.get(), 4);
    assert!(suppliers[0].is_return.get() && suppliers[1].is_return.get());
    assert!(!suppliers[0].is_price_final.get());
    assert!(suppliers[1].is_price_final.get());
    assert!(suppliers[1].delivery_date.is_zero());

    let brands = c.brands().unwrap();
    let originals: Vec<bool> = brands.iter().map(|b| b.is_original.get()).collect();
    assert_eq!(originals, [false, true, false]);
    assert_eq!(brands[2].name, "MANN-FILTER");

    let groups = c.brand_groups().unwrap();
    let vag: Vec<i32> = groups[0].brand_ids.iter().map(|id| id.get()).collect();
    assert_eq!(groups[0].name, "VAG");
    assert_eq!(vag, [112, 113, 114]);

    let info = c.product_info("0986452044", 51).unwrap();
    assert_eq!(info.product_id, 1_296_367);
    assert_eq!(info.images.len(), 1);
    assert_eq!(info.properties, vec![json!({"name": "Высота", "value": "79 мм"})]);
    assert_eq!(info.analogs[0].weight.get(), 0.31);
    assert_eq!(info.analogs[0].volume.get(), 0.6);

    let rates = c.currencies().unwrap();
    assert_eq!(rates[0].rate.get(), 1.0);
    assert_eq!(rates[1].rate.get(), 1.07);

    let by_code = c.brands_by_code("0986452044").unwrap();
    assert_eq!(by_code[0].offers_count, 14);
    assert_eq!(by_code[0].brand_group_id, 40);

    let statuses = c.position_statuses().unwrap();
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[2].status_id, 4);
}

#[test]
fn shipments() {
    let c = client(start_mock());

    let unloads = c.unloads(date(2023, 11, 1), date(2023, 11, 30)).unwrap();
    assert_eq!(unloads.len(), 2);
    assert_eq!(unloads[0].unload_id, 5120);
    assert_eq!(unloads[0].sum_total.get(), 1291.2);
    assert_eq!(unloads[0].sum_works.get(), 0.0);
    assert_eq!(unloads[0].carrier_waybill, None);
    assert_eq!(unloads[1].sum_delivery.get(), 0.0);
    assert_eq!(unloads[1].carrier_waybill, Some(json!("20450812345678")));
    assert_eq!(unloads[1].create_time.get(), Some(at(2023, 11, 9, 8, 0, 0, 0)));

    let data = c.unload_data(5120).unwrap();
    assert_eq!(data.boxes[0].sum_positions.get(), 1234.5);
    assert_eq!(data.boxes[0].sum_works.get(), 56.7);
    assert_eq!(data.positions[0].price_final.get(), 4.5);
    assert_eq!(data.positions[0].sticker, "TM-7001-1");

    let ready = c.boxes_ready().unwrap();
    assert_eq!(ready[0].box_id, 7002);
    assert_eq!(ready[0].sum_works.get(), 0.0);
    assert_eq!(ready[0].weight.get(), 12.5);
}

#[test]
fn basket_and_orders() {
    let c = client(start_mock());

    let added = c.basket_add(1_296_367, "EUAA", 2, "REF-1", None).unwrap();
    assert_eq!(added.basket_id, tehnomir_mock::KNOWN_BASKET_ID);

    let basket = c.basket_positions().unwrap();
    assert_eq!(basket[0].basket_id, 311);
    assert_eq!(basket[0].position.brand, "BOSCH");
    assert_eq!(basket[0].position.price.get(), 4.13);

    c.basket_delete_position(311).unwrap();
    let err = c.basket_delete_position(999).unwrap_err();
    assert!(
        matches!(
            err,
            ApiError::UnexpectedResponse {
                endpoint: Endpoint::BasketDelete
            }
        ),
        "{err:?}"
    );
    c.basket_clear().unwrap();

    let order = c.order_create("A-19").unwrap();
    assert_eq!(order.order_number, "A-19");
    assert_eq!(order.status_id.get(), 1);
    assert_eq!(order.sum.get(), 8.26);

    let active = c.active_orders().unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].sum.get(), 1004.2);
    assert_eq!(active[0].status_id.get(), 2);
    assert_eq!(active[1].create_time.get(), Some(at(2023, 11, 10, 9, 12, 0, 120_000)));

    assert_eq!(c.order_search_by_date(date(2023, 11, 1), date(2023, 11, 30)).unwrap().len(), 2);
    assert_eq!(c.order_search_by_number("A-17").unwrap().len(), 2);

    let info = c.position_info("REF-1").unwrap();
    assert_eq!(info.len(), 1);
    let states = &info[0].states;
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].status_changed_date.get(), Some(at(2023, 11, 9, 13, 40, 39, 0)));
    assert_eq!(states[1].status_id, 6);

    let since = at(2023, 11, 1, 0, 0, 0, 0);
    assert_eq!(c.changed_positions(since).unwrap()[0].order_position_id, 45001);
    assert_eq!(c.order_positions(901).unwrap()[0].order_id, 901);
    assert_eq!(c.order_positions_by_status(2).unwrap().len(), 1);
}

#[test]
fn wrong_token_surfaces_vendor_401() {
    let addr = start_mock();
    let c = TehnomirClient::new(config_for(addr, "wrong-token")).unwrap();

    let err = c.brands().unwrap_err();
    match &err {
        ApiError::Vendor { status, name, .. } => {
            assert_eq!(*status, 401);
            assert_eq!(name, "Unauthorized");
        }
        other => panic!("expected vendor error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.starts_with("401:Unauthorized - "), "{message}");
}

#[test]
fn unreachable_host_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let c = client(addr);

    let err = c.test_connect(None).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

#[test]
fn shared_client_serves_concurrent_callers() {
    let c = client(start_mock());

    std::thread::scope(|scope| {
        for i in 0..8 {
            let c = &c;
            scope.spawn(move || {
                for round in 0..5 {
                    c.test_connect(Some(&format!("phrase-{i}-{round}"))).unwrap();
                    let code = format!("CODE{i}X{round}");
                    let found = c.search_with_analogs(&code, Currency::Usd).unwrap();
                    assert_eq!(found[0].code, code);
                }
            });
        }
    });
}

/// Answer one request with `body`, read off a raw socket.
fn serve_once(body: String) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).unwrap();
            assert!(n > 0, "client closed before sending headers");
            request.extend_from_slice(&chunk[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while request.len() < header_end + content_length {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    addr
}

#[test]
fn large_answers_are_read_in_full() {
    let product = r#"{"productId":88211,"brand":"MANN-FILTER","code":"W71275","descriptionRus":"Фильтр масляный","quantity":4,"price":"3.90","currency":"USD","codePrinted":"W 712/75","priceForRemote":"4.10"}"#;
    let count = 11 * 1024 * 1024 / product.len() + 1;
    let data = vec![product; count].join(",");
    let body = format!(r#"{{"success":true,"data":[{data}]}}"#);
    assert!(body.len() > 10 * 1024 * 1024);

    let c = client(serve_once(body));
    let stock = c.stock_price().unwrap();
    assert_eq!(stock.len(), count);
    assert_eq!(stock[count - 1].price_for_remote.get(), 4.10);
}
