use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Category summary embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "categoryId")]
    pub category: CategorySummary,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: Decimal,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub image: String,
}

impl ProductDraft {
    /// Reject drafts the API would refuse anyway.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if self.price.is_sign_negative() {
            return Err(ValidationError::Negative { field: "price" });
        }
        if self.category_id.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "categoryId",
            });
        }
        Ok(())
    }
}

/// Response of a delete: the server echoes the removed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedProduct {
    #[serde(rename = "_id")]
    pub id: String,
}

/// One page of a list endpoint.
///
/// The products API spells the fields `products` and `totalProduct`;
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "products")]
    pub items: Vec<T>,
    #[serde(rename = "totalCount", alias = "totalProduct")]
    pub total_count: u64,
}

/// Search, price range and pagination for product listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub search_query: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_price: Decimal,
    pub offset: u32,
    pub limit: u32,
    /// Scopes the listing to one category; sent in the path, not the query.
    #[serde(skip)]
    pub category_id: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            min_price: Decimal::ZERO,
            max_price: Decimal::from(10_000),
            offset: 0,
            limit: 10,
            category_id: None,
        }
    }
}

impl ProductQuery {
    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_price.is_sign_negative() {
            return Err(ValidationError::Negative { field: "minPrice" });
        }
        if self.min_price > self.max_price {
            return Err(ValidationError::PriceRange {
                min: self.min_price.to_string(),
                max: self.max_price.to_string(),
            });
        }
        Ok(())
    }

    /// Page number (1-based) this query's offset falls on.
    pub fn page(&self) -> u32 {
        if self.limit == 0 {
            1
        } else {
            self.offset / self.limit + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Product 6".into(),
            price: Decimal::from(60),
            description: "Description 6".into(),
            category_id: "6".into(),
            image: "Image 6".into(),
        }
    }

    #[test]
    fn product_reads_api_field_names() {
        let json = r#"{
            "_id": "3",
            "title": "Product 3",
            "price": 30,
            "description": "Description 3",
            "categoryId": { "_id": "3", "name": "Category 3", "image": "Image 3" },
            "image": "Image 3",
            "quantity": 6
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "3");
        assert_eq!(product.price, Decimal::from(30));
        assert_eq!(product.category.name, "Category 3");
        assert_eq!(product.quantity, 6);
    }

    #[test]
    fn page_accepts_products_spelling() {
        let json = r#"{ "totalProduct": 0, "products": [] }"#;
        let page: Page<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn draft_validation() {
        assert!(draft().validate().is_ok());

        let mut untitled = draft();
        untitled.title = "  ".into();
        assert_eq!(
            untitled.validate(),
            Err(ValidationError::Empty { field: "title" })
        );

        let mut negative = draft();
        negative.price = Decimal::from(-1);
        assert_eq!(
            negative.validate(),
            Err(ValidationError::Negative { field: "price" })
        );
    }

    #[test]
    fn query_defaults_match_listing_page() {
        let query = ProductQuery::default();
        assert_eq!(query.limit, 10);
        assert_eq!(query.max_price, Decimal::from(10_000));
        assert_eq!(query.page(), 1);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn query_prices_serialize_as_plain_numbers() {
        let value = serde_json::to_value(ProductQuery::default()).unwrap();
        assert_eq!(value["minPrice"], "0");
        assert_eq!(value["maxPrice"], "10000");
        assert!(value.get("categoryId").is_none());

        let query = ProductQuery {
            min_price: Decimal::new(1250, 2),
            ..ProductQuery::default()
        };
        assert_eq!(serde_json::to_value(query).unwrap()["minPrice"], "12.50");
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let query = ProductQuery {
            min_price: Decimal::from(50),
            max_price: Decimal::from(10),
            ..ProductQuery::default()
        };
        assert!(matches!(
            query.validate(),
            Err(ValidationError::PriceRange { .. })
        ));
    }

    #[test]
    fn page_number_from_offset() {
        let query = ProductQuery {
            offset: 20,
            ..ProductQuery::default()
        };
        assert_eq!(query.page(), 3);
    }
}
