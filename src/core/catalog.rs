//! Catalog: the fixed, read-only list of sellable items.
//!
//! The catalog is built once at startup and never mutated. Item ids are
//! unique; [`Catalog::new`] enforces this.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("Item id must be positive")]
    ZeroId,
}

// ============================================================================
// Item
// ============================================================================

/// Stable identifier carried by each card's "Add" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "UI")]
    Ui,
    Web,
    Tools,
}

impl Category {
    /// All variants in display order.
    pub const ALL: [Category; 3] = [Self::Ui, Self::Web, Self::Tools];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Web => "Web",
            Self::Tools => "Tools",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative price held in cents so formatting is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: u64) -> Self {
        Self(units * 100)
    }

    pub fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    /// `$19.00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Popularity score; `None` ranks as 0.
    pub popularity: Option<u32>,
    /// Key into the placeholder color table.
    pub image_key: String,
}

impl Item {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: Price,
        popularity: Option<u32>,
        image_key: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            category,
            price,
            popularity,
            image_key: image_key.into(),
        }
    }

    /// Score used by the popularity sort.
    pub fn rank(&self) -> u32 {
        self.popularity.unwrap_or(0)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.0 == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The fixture catalog shipped with the application.
    pub fn builtin() -> Self {
        use Category::*;
        Self {
            items: vec![
                Item::new(1, "Portfolio UI Kit", Ui, Price::from_units(0), Some(95), "ui-kit"),
                Item::new(2, "Minimal Blog", Web, Price::from_units(19), Some(88), "blog"),
                Item::new(3, "JS Utilities", Tools, Price::from_units(9), Some(75), "utils"),
                Item::new(4, "E-Commerce Template", Web, Price::from_units(29), Some(93), "shop"),
                Item::new(5, "Design Tokens", Ui, Price::from_units(5), Some(65), "tokens"),
                Item::new(6, "Charts Module", Tools, Price::from_units(15), Some(80), "charts"),
                Item::new(7, "Landing Page", Web, Price::from_units(12), Some(70), "landing"),
                Item::new(8, "Button Library", Ui, Price::from_units(3), Some(60), "buttons"),
            ],
        }
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut out = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category) {
                out.push(item.category);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
