//! Core data models used throughout Product Finder.
//!
//! Records arrive from the remote catalog as [`RawProduct`]s and are stamped
//! with the [`ProductType`] of the [`Category`] they were fetched from,
//! producing the [`Product`]s the filter and the view work on.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One of the three fixed remote product collections.
///
/// The declaration order is the discovery order of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Computers,
    Cellphones,
    Tablets,
}

impl Category {
    /// All categories, in the order their results are concatenated.
    pub const ALL: [Category; 3] = [Category::Computers, Category::Cellphones, Category::Tablets];

    /// Collection name as it appears in the endpoint path.
    pub fn collection(self) -> &'static str {
        match self {
            Category::Computers => "computers",
            Category::Cellphones => "cellphones",
            Category::Tablets => "tablets",
        }
    }

    /// The singular product type stamped on every record of this collection:
    /// the collection name without its trailing `s`.
    pub fn product_type(self) -> ProductType {
        match self {
            Category::Computers => ProductType::Computer,
            Category::Cellphones => ProductType::Cellphone,
            Category::Tablets => ProductType::Tablet,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Singular product type, serialized as `"computer"`, `"cellphone"` or `"tablet"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Computer,
    Cellphone,
    Tablet,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Computer => "computer",
            ProductType::Cellphone => "cellphone",
            ProductType::Tablet => "tablet",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price exactly as the catalog reports it. Never validated: any JSON value
/// is accepted and displayed as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write_number(f, n),
            Price::Text(s) => f.write_str(s),
            Price::Other(v) => write_value(f, v),
        }
    }
}

/// Whole floats print without a fractional part: `1200.0` shows as `1200`.
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    match n.as_f64() {
        // `+ 0.0` turns -0.0 into 0.0.
        Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => {
            write!(f, "{:.0}", x + 0.0)
        }
        _ => write!(f, "{}", n),
    }
}

/// Text form of a non-scalar price, as a page's text content would show it.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write_number(f, n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_value(f, item)?;
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

fn price_or_empty<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Price>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record as parsed from a category endpoint, before it is typed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawProduct {
    pub name: String,
    #[serde(default, deserialize_with = "price_or_empty")]
    pub price: Price,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub image: String,
    /// Every other field of the record, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawProduct {
    pub fn new(name: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }

    /// Stamps the record with the type of the collection it came from.
    ///
    /// A `type` field already present on the record is replaced.
    pub fn stamp(mut self, category: Category) -> Product {
        self.extra.remove("type");
        Product {
            name: self.name,
            price: self.price,
            image: self.image,
            product_type: category.product_type(),
            extra: self.extra,
        }
    }
}

/// A typed product, as held in a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_is_singular_collection() {
        for category in Category::ALL {
            let expected = category.collection().strip_suffix('s').unwrap();
            assert_eq!(category.product_type().as_str(), expected);
        }
        assert_eq!(Category::Computers.product_type(), ProductType::Computer);
        assert_eq!(Category::Cellphones.product_type(), ProductType::Cellphone);
        assert_eq!(Category::Tablets.product_type(), ProductType::Tablet);
    }

    #[test]
    fn test_raw_product_accepts_numeric_and_text_price() {
        let json = r#"[
            {"id": 1, "name": "Laptop X", "price": 1200, "image": "x.png"},
            {"id": 2, "name": "Phone Y", "price": "$300", "image": "y.png"},
            {"id": 3, "name": "Tab Z", "price": null}
        ]"#;
        let records: Vec<RawProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].price.to_string(), "1200");
        assert_eq!(records[1].price, Price::Text("$300".to_string()));
        assert_eq!(records[2].price, Price::default());
        assert_eq!(records[2].image, "");
        assert_eq!(records[0].extra.get("id"), Some(&Value::from(1)));
    }

    #[test]
    fn test_missing_name_is_a_parse_error() {
        let json = r#"[{"price": 10, "image": "a.png"}]"#;
        assert!(serde_json::from_str::<Vec<RawProduct>>(json).is_err());
    }

    #[test]
    fn test_stamp_overwrites_existing_type() {
        let mut raw = RawProduct::new("Tab", Price::Text("1".into()), "t.png");
        raw.extra.insert("type".to_string(), Value::from("gadget"));
        raw.extra.insert("brand".to_string(), Value::from("Acme"));

        let product = raw.stamp(Category::Tablets);
        assert_eq!(product.product_type, ProductType::Tablet);
        assert!(!product.extra.contains_key("type"));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "tablet");
        assert_eq!(json["brand"], "Acme");
    }

    #[test]
    fn test_any_price_shape_is_accepted() {
        let json = r#"[
            {"name": "Laptop X", "price": true, "image": "x.png"},
            {"name": "Phone Y", "price": {"amount": 10}},
            {"name": "Tab Z", "price": [10, "USD"]}
        ]"#;
        let records: Vec<RawProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].price, Price::Other(Value::Bool(true)));
        assert_eq!(records[0].price.to_string(), "true");
        assert_eq!(records[1].price.to_string(), "[object Object]");
        assert_eq!(records[2].price.to_string(), "10,USD");
    }

    #[test]
    fn test_whole_float_price_drops_fraction() {
        let records: Vec<RawProduct> = serde_json::from_str(
            r#"[{"name": "A", "price": 1200.0}, {"name": "B", "price": 19.99}, {"name": "C", "price": -0.0}]"#,
        )
        .unwrap();
        assert_eq!(records[0].price.to_string(), "1200");
        assert_eq!(records[1].price.to_string(), "19.99");
        assert_eq!(records[2].price.to_string(), "0");
    }
}
