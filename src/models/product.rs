use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product -- a catalog entry as returned by the API
// ---------------------------------------------------------------------------

/// A product as echoed by the server.
///
/// Every field defaults when absent: records are accepted as-is, so a partial
/// record yields empty strings / zero rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: i64,
}

// ---------------------------------------------------------------------------
// ProductField
// ---------------------------------------------------------------------------

/// The user-editable fields of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// ProductDraft -- body of POST /products
// ---------------------------------------------------------------------------

/// In-progress fields for a product that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    /// Apply form input to one field.
    ///
    /// Price text that does not parse leaves the price at 0.0.
    pub fn set(&mut self, field: ProductField, value: &str) {
        match field {
            ProductField::Title => self.title = value.to_string(),
            ProductField::Price => self.price = parse_price(value).unwrap_or(0.0),
            ProductField::Description => self.description = value.to_string(),
            ProductField::Category => self.category = value.to_string(),
            ProductField::Image => self.image = value.to_string(),
        }
    }

    /// Reset every field to empty / zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// ProductPatch -- partial update of a loaded product
// ---------------------------------------------------------------------------

/// Fields to change on an existing product. Unset fields keep their loaded value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl ProductPatch {
    /// Apply form input to one field. An empty value unsets the field, so
    /// clearing an input never blanks the product.
    pub fn set(&mut self, field: ProductField, value: &str) {
        let text = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        match field {
            ProductField::Title => self.title = text,
            ProductField::Price => self.price = text.as_deref().and_then(parse_price),
            ProductField::Description => self.description = text,
            ProductField::Category => self.category = text,
            ProductField::Image => self.image = text,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }

    /// Merge onto `product`: patch fields win, everything else is kept.
    pub fn apply_to(&self, product: &Product) -> Product {
        Product {
            id: product.id,
            title: self.title.clone().unwrap_or_else(|| product.title.clone()),
            price: self.price.unwrap_or(product.price),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| product.description.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| product.category.clone()),
            image: self.image.clone().unwrap_or_else(|| product.image.clone()),
            rating: product.rating.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
