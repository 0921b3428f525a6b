//! One method per vendor endpoint.
//!
//! Each method maps its arguments onto a request body, dispatches it and
//! returns the decoded `data`. Argument normalization (code cleaning, flag and
//! date formatting) happens here; nothing else does.

use chrono::{NaiveDate, NaiveDateTime};

use crate::client::TehnomirClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::transport::Transport;
use crate::types::request::{
    BasketAddBody, BasketDeleteBody, BrandsByCodeBody, ChangedPositionsBody, Currency,
    DateRangeBody, OrderCreateBody, OrderPositionsBody, OrderPositionsByStatusBody,
    OrderSearchBody, PositionInfoBody, PriceSearchBody, ProductInfoBody, TestConnectBody,
    TokenOnly, UnloadDataBody,
};
use crate::types::response::{
    BasketAdded, BasketPosition, Brand, BrandByCode, BrandGroup, CurrencyRate, FoundDetail,
    Order, Position, PositionStatus, ProductInfo, StockProduct, Supplier, TestConnectData,
    Unload, UnloadBox, UnloadData,
};
use crate::util::{bool_to_flag, clear_code};

/// Date layout the vendor expects in range filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Date-time layout of the changed-positions cursor.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Search for any brand.
const ANY_BRAND: i64 = 0;

impl<T: Transport> TehnomirClient<T> {
    /// Check connectivity and credentials. When `phrase` is given the vendor
    /// must echo it back unchanged.
    pub fn test_connect(&self, phrase: Option<&str>) -> Result<()> {
        let body = TestConnectBody {
            phrase: phrase.unwrap_or_default().to_string(),
        };
        let echo: TestConnectData = self.call_with(Endpoint::TestConnect, &body)?;
        match phrase {
            Some(expected) if echo.test_string != expected => Err(ApiError::UnexpectedResponse {
                endpoint: Endpoint::TestConnect,
            }),
            _ => Ok(()),
        }
    }

    fn price_search(
        &self,
        code: &str,
        currency: Currency,
        brand_id: i64,
        with_analogs: bool,
    ) -> Result<Vec<FoundDetail>> {
        let body = PriceSearchBody {
            brand_id,
            code: clear_code(code),
            is_show_analogs: bool_to_flag(with_analogs),
            currency,
        };
        self.call_with(Endpoint::PriceSearch, &body)
    }

    /// Offers for `code` across all brands, analogs included.
    pub fn search_with_analogs(&self, code: &str, currency: Currency) -> Result<Vec<FoundDetail>> {
        self.price_search(code, currency, ANY_BRAND, true)
    }

    pub fn search_by_brand_with_analogs(
        &self,
        code: &str,
        brand_id: i64,
        currency: Currency,
    ) -> Result<Vec<FoundDetail>> {
        self.price_search(code, currency, brand_id, true)
    }

    pub fn search_by_brand_without_analogs(
        &self,
        code: &str,
        brand_id: i64,
        currency: Currency,
    ) -> Result<Vec<FoundDetail>> {
        self.price_search(code, currency, brand_id, false)
    }

    /// The vendor's own warehouse stock.
    pub fn stock_price(&self) -> Result<Vec<StockProduct>> {
        self.call(Endpoint::StockPrice)
    }

    pub fn suppliers(&self) -> Result<Vec<Supplier>> {
        self.call(Endpoint::Suppliers)
    }

    pub fn brands(&self) -> Result<Vec<Brand>> {
        self.call(Endpoint::Brands)
    }

    pub fn brand_groups(&self) -> Result<Vec<BrandGroup>> {
        self.call(Endpoint::BrandGroups)
    }

    pub fn product_info(&self, code: &str, brand_id: i64) -> Result<ProductInfo> {
        let body = ProductInfoBody {
            brand_id,
            code: code.to_string(),
        };
        self.call_with(Endpoint::ProductInfo, &body)
    }

    pub fn currencies(&self) -> Result<Vec<CurrencyRate>> {
        self.call(Endpoint::Currencies)
    }

    /// Brands that carry a part with this code.
    pub fn brands_by_code(&self, code: &str) -> Result<Vec<BrandByCode>> {
        let body = BrandsByCodeBody {
            code: code.to_string(),
        };
        self.call_with(Endpoint::BrandsByCode, &body)
    }

    pub fn position_statuses(&self) -> Result<Vec<PositionStatus>> {
        self.call(Endpoint::PositionStatuses)
    }

    /// Shipments created between `from` and `to`, inclusive.
    pub fn unloads(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Unload>> {
        let body = DateRangeBody {
            from_date: from.format(DATE_FORMAT).to_string(),
            to_date: to.format(DATE_FORMAT).to_string(),
        };
        self.call_with(Endpoint::Unloads, &body)
    }

    pub fn unload_data(&self, unload_id: i64) -> Result<UnloadData> {
        self.call_with(Endpoint::UnloadData, &UnloadDataBody { unload_id })
    }

    pub fn boxes_ready(&self) -> Result<Vec<UnloadBox>> {
        self.call(Endpoint::BoxesReadyToSend)
    }

    /// Put an offer into the basket. `reference` is the caller's own tag for
    /// the position and comes back upper-cased.
    pub fn basket_add(
        &self,
        product_id: i64,
        price_logo: &str,
        quantity: u32,
        reference: &str,
        comment: Option<&str>,
    ) -> Result<BasketAdded> {
        let body = BasketAddBody {
            product_id,
            price_logo: price_logo.to_string(),
            quantity,
            reference: reference.to_string(),
            comment: comment.unwrap_or_default().to_string(),
        };
        self.call_with(Endpoint::BasketAdd, &body)
    }

    pub fn basket_positions(&self) -> Result<Vec<BasketPosition>> {
        self.call(Endpoint::BasketPositions)
    }

    pub fn basket_delete_position(&self, basket_id: i64) -> Result<()> {
        self.acknowledge(Endpoint::BasketDelete, Some(&BasketDeleteBody { basket_id }))
    }

    pub fn basket_clear(&self) -> Result<()> {
        self.acknowledge::<TokenOnly>(Endpoint::BasketClear, None)
    }

    /// Positions tagged with `reference`; the vendor returns a single entry.
    pub fn position_info(&self, reference: &str) -> Result<Vec<Position>> {
        let body = PositionInfoBody {
            reference: reference.to_string(),
        };
        self.call_with(Endpoint::PositionInfo, &body)
    }

    /// Turn the current basket into an order.
    pub fn order_create(&self, order_number: &str) -> Result<Order> {
        let body = OrderCreateBody {
            order_number: order_number.to_string(),
        };
        self.call_with(Endpoint::OrderCreate, &body)
    }

    pub fn active_orders(&self) -> Result<Vec<Order>> {
        self.call(Endpoint::ActiveOrders)
    }

    pub fn order_search_by_date(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Order>> {
        let body = OrderSearchBody {
            from_date: from.format(DATE_FORMAT).to_string(),
            to_date: to.format(DATE_FORMAT).to_string(),
            ..OrderSearchBody::default()
        };
        self.call_with(Endpoint::OrderSearch, &body)
    }

    pub fn order_search_by_number(&self, order_number: &str) -> Result<Vec<Order>> {
        let body = OrderSearchBody {
            order_number: order_number.to_string(),
            ..OrderSearchBody::default()
        };
        self.call_with(Endpoint::OrderSearch, &body)
    }

    /// Positions whose status changed since `since`.
    pub fn changed_positions(&self, since: NaiveDateTime) -> Result<Vec<Position>> {
        let body = ChangedPositionsBody {
            from_date_time: since.format(DATE_TIME_FORMAT).to_string(),
        };
        self.call_with(Endpoint::ChangedPositions, &body)
    }

    pub fn order_positions(&self, order_id: i64) -> Result<Vec<Position>> {
        self.call_with(Endpoint::OrderPositions, &OrderPositionsBody { order_id })
    }

    // Status 2 is "in progress", 4 is "closed".
    pub fn order_positions_by_status(&self, status_id: i64) -> Result<Vec<Position>> {
        self.call_with(
            Endpoint::OrderPositionsByStatus,
            &OrderPositionsByStatusBody { status_id },
        )
    }
}
