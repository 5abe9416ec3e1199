use serde::{Deserialize, Serialize};

use super::schema::{DefaultValue, FieldKind, FieldSpec, RecordSchema};
use super::Record;

pub static PRODUCT_SCHEMA: RecordSchema = RecordSchema {
    title: "Product",
    collection: "product",
    description: "Products collection schema",
    fields: &[
        FieldSpec::required("title", FieldKind::Text, "Product title"),
        FieldSpec::optional("description", FieldKind::Text, "Product description"),
        FieldSpec::required("price", FieldKind::Decimal, "Price in dollars").min(0.0),
        FieldSpec::required("category", FieldKind::Text, "Product category"),
        FieldSpec::with_default(
            "in_stock",
            FieldKind::Boolean,
            DefaultValue::Bool(true),
            "Whether product is in stock",
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Record for Product {
    fn schema() -> &'static RecordSchema {
        &PRODUCT_SCHEMA
    }
}
