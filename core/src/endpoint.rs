//! The closed set of vendor endpoints.
//!
//! # Design
//! The vendor publishes a fixed catalog of POST endpoints, each accepting one
//! request-body shape. `Endpoint` names the path, `PayloadShape` names the
//! body, and `Endpoint::shape` ties the two together so the dispatcher can
//! refuse a body that does not belong to the endpoint it is sent to.

use std::fmt;

/// A vendor API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    TestConnect,

    PriceSearch,
    StockPrice,

    Unloads,
    UnloadData,
    BoxesReadyToSend,

    Suppliers,
    Brands,
    BrandGroups,
    ProductInfo,
    Currencies,
    BrandsByCode,
    PositionStatuses,

    BasketAdd,
    BasketPositions,
    BasketDelete,
    BasketClear,

    PositionInfo,
    OrderCreate,
    ActiveOrders,
    OrderSearch,
    ChangedPositions,
    OrderPositions,
    OrderPositionsByStatus,
}

/// The request-body shape an endpoint accepts, in addition to the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    TokenOnly,
    TestConnect,
    PriceSearch,
    ProductInfo,
    DateRange,
    UnloadData,
    BasketAdd,
    PositionInfo,
    BasketDelete,
    BrandsByCode,
    OrderCreate,
    OrderSearch,
    ChangedPositions,
    OrderPositions,
    OrderPositionsByStatus,
}

impl Endpoint {
    pub const ALL: [Endpoint; 24] = [
        Endpoint::TestConnect,
        Endpoint::PriceSearch,
        Endpoint::StockPrice,
        Endpoint::Unloads,
        Endpoint::UnloadData,
        Endpoint::BoxesReadyToSend,
        Endpoint::Suppliers,
        Endpoint::Brands,
        Endpoint::BrandGroups,
        Endpoint::ProductInfo,
        Endpoint::Currencies,
        Endpoint::BrandsByCode,
        Endpoint::PositionStatuses,
        Endpoint::BasketAdd,
        Endpoint::BasketPositions,
        Endpoint::BasketDelete,
        Endpoint::BasketClear,
        Endpoint::PositionInfo,
        Endpoint::OrderCreate,
        Endpoint::ActiveOrders,
        Endpoint::OrderSearch,
        Endpoint::ChangedPositions,
        Endpoint::OrderPositions,
        Endpoint::OrderPositionsByStatus,
    ];

    /// Path relative to the API host, without a leading slash.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TestConnect => "test/connect",
            Endpoint::PriceSearch => "price/search",
            Endpoint::StockPrice => "price/getStockPrice",
            Endpoint::Unloads => "unload/search",
            Endpoint::UnloadData => "unload/getData",
            Endpoint::BoxesReadyToSend => "unload/getBoxesReadyToSend",
            Endpoint::Suppliers => "info/getSuppliers",
            Endpoint::Brands => "info/getBrands",
            Endpoint::BrandGroups => "info/getBrandGroups",
            Endpoint::ProductInfo => "info/getProductInfo",
            Endpoint::Currencies => "info/getCurrencies",
            Endpoint::BrandsByCode => "info/getBrandsByCode",
            Endpoint::PositionStatuses => "info/getPositionStatuses",
            Endpoint::BasketAdd => "basket/add",
            Endpoint::BasketPositions => "basket/getPositions",
            Endpoint::BasketDelete => "basket/delete",
            Endpoint::BasketClear => "basket/clear",
            Endpoint::PositionInfo => "order/getPositionInfo",
            Endpoint::OrderCreate => "order/create",
            Endpoint::ActiveOrders => "order/getActive",
            Endpoint::OrderSearch => "order/search",
            Endpoint::ChangedPositions => "order/getChangedPositions",
            Endpoint::OrderPositions => "order/getOrderPositions",
            Endpoint::OrderPositionsByStatus => "order/getOrderPositionsByStatus",
        }
    }

    pub fn shape(self) -> PayloadShape {
        match self {
            Endpoint::TestConnect => PayloadShape::TestConnect,
            Endpoint::PriceSearch => PayloadShape::PriceSearch,
            Endpoint::Unloads => PayloadShape::DateRange,
            Endpoint::UnloadData => PayloadShape::UnloadData,
            Endpoint::ProductInfo => PayloadShape::ProductInfo,
            Endpoint::BrandsByCode => PayloadShape::BrandsByCode,
            Endpoint::BasketAdd => PayloadShape::BasketAdd,
            Endpoint::BasketDelete => PayloadShape::BasketDelete,
            Endpoint::PositionInfo => PayloadShape::PositionInfo,
            Endpoint::OrderCreate => PayloadShape::OrderCreate,
            Endpoint::OrderSearch => PayloadShape::OrderSearch,
            Endpoint::ChangedPositions => PayloadShape::ChangedPositions,
            Endpoint::OrderPositions => PayloadShape::OrderPositions,
            Endpoint::OrderPositionsByStatus => PayloadShape::OrderPositionsByStatus,
            Endpoint::StockPrice
            | Endpoint::BoxesReadyToSend
            | Endpoint::Suppliers
            | Endpoint::Brands
            | Endpoint::BrandGroups
            | Endpoint::Currencies
            | Endpoint::PositionStatuses
            | Endpoint::BasketPositions
            | Endpoint::BasketClear
            | Endpoint::ActiveOrders => PayloadShape::TokenOnly,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
