//! Response records, mirroring the vendor's documented `data` payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient::{LenientBool, LenientF64, LenientI64, LenientInt, LenientTime};

/// Outer shape of every vendor response: `{"success": .., "data": ..}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

/// Error body sent with a non-200 status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub data: VendorErrorRecord,
}

/// Error record found in `data` when the vendor refuses a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorErrorRecord {
    pub name: String,
    pub status: LenientI64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestConnectData {
    pub test_string: String,
}

/// A catalog hit from `price/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoundDetail {
    pub product_id: i64,
    pub brand_id: i64,
    pub brand_group_id: i64,
    pub brand: String,
    pub code: String,
    pub description_rus: String,
    pub description_ua: String,
    pub weight: LenientF64,
    pub is_original: LenientBool,
    pub is_exist_product_info: LenientBool,
    #[serde(rename = "rests")]
    pub offers: Vec<Offer>,
}

/// One supplier's offer for a found detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub price_logo: String,
    pub price: LenientF64,
    pub currency: String,
    pub quantity: LenientI64,
    pub quantity_type: String,
    pub multiplicity: i64,
    pub price_quality: LenientF64,
    pub delivery_type_id: i64,
    pub delivery_type: String,
    #[serde(rename = "deliveryTime")]
    pub delivery_days: i64,
    pub delivery_date: LenientTime,
    pub delivery_percent: i64,
    pub price_change_date: LenientTime,
    pub is_return: LenientBool,
    pub is_price_final: LenientBool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    pub product_id: i64,
    pub brand: String,
    pub code: String,
    pub description_rus: String,
    pub description_ua: String,
    pub weight: LenientF64,
    pub volume: LenientF64,
    pub images: Vec<ProductImage>,
    /// Free-form property list; its shape is not documented.
    pub properties: Vec<Value>,
    pub analogs: Vec<Analog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImage {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analog {
    pub product_id: i64,
    pub brand: String,
    pub code: String,
    pub description_rus: String,
    pub description_ua: String,
    pub weight: LenientF64,
    pub volume: LenientF64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub price_logo: String,
    pub delivery_type_id: i64,
    pub delivery_type: String,
    #[serde(rename = "deliveryTime")]
    pub delivery_days: i64,
    #[serde(rename = "deliveryTimeHours")]
    pub delivery_hours: LenientI64,
    pub delivery_date: LenientTime,
    pub region: String,
    pub region_en: String,
    pub region_ua: String,
    #[serde(rename = "isReturnFlag")]
    pub is_return: LenientBool,
    #[serde(rename = "isPriceFinalFlag")]
    pub is_price_final: LenientBool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub brand_id: i64,
    #[serde(rename = "brand")]
    pub name: String,
    pub is_original: LenientBool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandGroup {
    pub group_id: i64,
    #[serde(rename = "group")]
    pub name: String,
    pub brand_ids: Vec<LenientInt>,
}

/// A shipment from the vendor's warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unload {
    pub unload_id: i64,
    pub create_time: LenientTime,
    pub box_quantity: i64,
    pub sum_positions: LenientF64,
    pub sum_works: LenientF64,
    pub sum_delivery: LenientF64,
    pub sum_total: LenientF64,
    pub carrier: String,
    /// Null until the carrier assigns a waybill.
    pub carrier_waybill: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnloadData {
    pub boxes: Vec<UnloadBox>,
    pub positions: Vec<UnloadPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnloadBox {
    pub box_id: i64,
    pub sum_positions: LenientF64,
    /// Delivery cost of the box.
    pub sum_works: LenientF64,
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub weight: LenientF64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnloadPosition {
    pub box_id: i64,
    pub order_id: i64,
    pub order_number: String,
    pub order_position_id: i64,
    pub price_logo: String,
    pub brand: String,
    pub brand_id: i64,
    pub code: String,
    pub description_rus: String,
    pub description_ua: String,
    pub quantity: i64,
    pub price: LenientF64,
    pub price_final: LenientF64,
    pub currency: String,
    /// Upper-cased by the vendor.
    pub reference: String,
    pub comment: String,
    pub admin_comment: String,
    pub weight: LenientF64,
    pub sticker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketAdded {
    pub basket_id: i64,
}

/// An ordered (or basket) position and its status history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub order_id: i64,
    pub order_number: String,
    pub order_position_id: i64,
    pub price_logo: String,
    pub brand_id: i64,
    pub brand: String,
    /// As typed by the vendor, not cleared.
    pub code: String,
    /// Set when the vendor substitutes the part number on ordering.
    pub replace_code: String,
    pub description_rus: String,
    pub description_ua: String,
    pub price: LenientF64,
    pub currency: String,
    pub reference: String,
    pub comment: String,
    pub admin_comment: String,
    /// Several entries when part of the quantity was refused.
    pub states: Vec<PositionState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionState {
    pub quantity: i64,
    pub status_id: i64,
    pub status: String,
    pub status_changed_date: LenientTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketPosition {
    #[serde(default)]
    pub basket_id: i64,
    #[serde(flatten)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyRate {
    pub currency: String,
    pub rate: LenientF64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandByCode {
    pub brand_id: i64,
    pub brand: String,
    pub description_rus: String,
    pub description_ua: String,
    pub offers_count: i64,
    pub brand_group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionStatus {
    pub status_id: i64,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub order_id: i64,
    pub order_number: String,
    pub sum: LenientF64,
    pub status_id: LenientInt,
    pub status: String,
    pub create_time: LenientTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockProduct {
    pub product_id: i64,
    pub brand: String,
    pub code: String,
    pub description_rus: String,
    pub quantity: i64,
    pub price: LenientF64,
    pub currency: String,
    pub code_printed: String,
    pub price_for_remote: LenientF64,
}
