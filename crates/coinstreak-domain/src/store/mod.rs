use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fun,
    Food,
    Merch,
    Upgrade,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Fun => "fun",
            ProductCategory::Food => "food",
            ProductCategory::Merch => "merch",
            ProductCategory::Upgrade => "upgrade",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub category: ProductCategory,
    pub tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordability {
    pub affordable: bool,
    pub deficit: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u32,
        category: ProductCategory,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            tag: tag.into(),
        }
    }

    pub fn affordability(&self, balance: u32) -> Affordability {
        Affordability {
            affordable: balance >= self.price,
            deficit: self.price.saturating_sub(balance),
        }
    }
}

/// Catalog tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(CategoryFilter::All),
            "fun" => Ok(CategoryFilter::Only(ProductCategory::Fun)),
            "food" => Ok(CategoryFilter::Only(ProductCategory::Food)),
            "merch" => Ok(CategoryFilter::Only(ProductCategory::Merch)),
            "upgrade" => Ok(CategoryFilter::Only(ProductCategory::Upgrade)),
            other => Err(DomainError::InvalidInput(format!(
                "unknown store category '{}'",
                other
            ))),
        }
    }
}

/// Products matching `filter`, catalog order preserved.
pub fn filter_products(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}
