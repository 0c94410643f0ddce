//! Analytics select event.
//!
//! Composition returns one `select_item` event per render as an explicit
//! output. Delivery is the caller's concern; nothing here performs I/O.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Item record inside a select event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsItem {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Event parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectItemParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_name: Option<String>,
    pub items: Vec<AnalyticsItem>,
}

/// The `select_item` event attached to the whole card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectItemEvent {
    pub name: String,
    pub params: SelectItemParams,
}

impl SelectItemEvent {
    /// Build a select event carrying a single item.
    pub fn new(item_list_name: Option<String>, item: AnalyticsItem) -> Self {
        Self {
            name: "select_item".to_string(),
            params: SelectItemParams {
                item_list_name,
                items: vec![item],
            },
        }
    }
}

/// Builds the analytics item record for a product.
pub trait AnalyticsMapper {
    fn map(
        &self,
        product: &Product,
        price: Option<f64>,
        list_price: Option<f64>,
        index: Option<u32>,
    ) -> AnalyticsItem;
}

/// Direct field mapping from the product record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemMapper;

impl AnalyticsMapper for DefaultItemMapper {
    fn map(
        &self,
        product: &Product,
        price: Option<f64>,
        list_price: Option<f64>,
        index: Option<u32>,
    ) -> AnalyticsItem {
        AnalyticsItem {
            item_id: product.id.to_string(),
            item_group_id: product.group.as_ref().map(|g| g.id.to_string()),
            item_name: product.group.as_ref().and_then(|g| g.name.clone()),
            price,
            list_price,
            index,
        }
    }
}
