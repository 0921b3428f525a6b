//! Request bodies, one per payload shape.
//!
//! Bodies never carry the token. The client wraps them in an `Envelope` that
//! adds `apiToken` next to the body's own fields just before serialization.

use serde::{Deserialize, Serialize};

use crate::endpoint::PayloadShape;

mod sealed {
    pub trait Sealed {}
}

/// A request body the client knows how to send.
///
/// Sealed: the vendor's payload set is closed.
pub trait RequestBody: Serialize + sealed::Sealed {
    const SHAPE: PayloadShape;
}

macro_rules! request_body {
    ($($body:ty => $shape:ident),+ $(,)?) => {
        $(
            impl sealed::Sealed for $body {}

            impl RequestBody for $body {
                const SHAPE: PayloadShape = PayloadShape::$shape;
            }
        )+
    };
}

/// Token plus a body, flattened into a single JSON object.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<'a, B> {
    #[serde(rename = "apiToken")]
    pub api_token: &'a str,
    #[serde(flatten)]
    pub body: &'a B,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

/// Body of endpoints that take nothing but the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenOnly {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestConnectBody {
    #[serde(rename = "string")]
    pub phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSearchBody {
    pub brand_id: i64,
    pub code: String,
    pub is_show_analogs: u8,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfoBody {
    pub brand_id: i64,
    pub code: String,
}

/// Inclusive date range, both ends formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeBody {
    pub from_date: String,
    pub to_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnloadDataBody {
    pub unload_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketAddBody {
    pub product_id: i64,
    pub price_logo: String,
    pub quantity: u32,
    pub reference: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionInfoBody {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketDeleteBody {
    pub basket_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandsByCodeBody {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateBody {
    pub order_number: String,
}

/// Search by date range or by order number; the unused criterion is sent
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchBody {
    pub from_date: String,
    pub to_date: String,
    pub order_number: String,
}

/// `from_date_time` is formatted `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedPositionsBody {
    pub from_date_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPositionsBody {
    pub order_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPositionsByStatusBody {
    pub status_id: i64,
}

request_body! {
    TokenOnly => TokenOnly,
    TestConnectBody => TestConnect,
    PriceSearchBody => PriceSearch,
    ProductInfoBody => ProductInfo,
    DateRangeBody => DateRange,
    UnloadDataBody => UnloadData,
    BasketAddBody => BasketAdd,
    PositionInfoBody => PositionInfo,
    BasketDeleteBody => BasketDelete,
    BrandsByCodeBody => BrandsByCode,
    OrderCreateBody => OrderCreate,
    OrderSearchBody => OrderSearch,
    ChangedPositionsBody => ChangedPositions,
    OrderPositionsBody => OrderPositions,
    OrderPositionsByStatusBody => OrderPositionsByStatus,
}
