//! Synchronous client for the Tehnomir parts-catalog and ordering API.
//!
//! # Overview
//! Every vendor endpoint is a JSON POST carrying the API token inside the
//! body. `TehnomirClient` exposes one blocking method per endpoint; each call
//! is a single attempt with no retries and no state kept between calls.
//!
//! # Design
//! - `endpoint` is the closed catalog of paths and the body shape each takes.
//! - `client` holds the dispatch primitive: build the token envelope, send
//!   it through a `Transport`, check status and `success`, return `data`.
//! - `catalog` maps each operation's arguments onto a request body.
//! - `lenient` decodes the scalars the vendor encodes inconsistently.
//!
//! ```no_run
//! use tehnomir::{Config, Currency, TehnomirClient};
//!
//! let client = TehnomirClient::new(Config::new("api-token"))?;
//! for detail in client.search_with_analogs("OC 90", Currency::Usd)? {
//!     println!("{} {}: {} offers", detail.brand, detail.code, detail.offers.len());
//! }
//! # Ok::<(), tehnomir::ApiError>(())
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod lenient;
pub mod transport;
pub mod types;
pub mod util;

pub use client::TehnomirClient;
pub use config::Config;
pub use endpoint::{Endpoint, PayloadShape};
pub use error::{ApiError, Result};
pub use http::{HttpRequest, HttpResponse};
pub use lenient::{LenientBool, LenientF64, LenientI64, LenientInt, LenientTime};
pub use transport::{Transport, UreqTransport};
pub use types::request::Currency;
pub use types::response::{
    Analog, BasketAdded, BasketPosition, Brand, BrandByCode, BrandGroup, CurrencyRate,
    FoundDetail, Offer, Order, Position, PositionState, PositionStatus, ProductImage,
    ProductInfo, StockProduct, Supplier, TestConnectData, Unload, UnloadBox, UnloadData,
    UnloadPosition, VendorErrorRecord,
};
