use serde::{Deserialize, Serialize};

/// Catalog category (fixed set).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Food,
    Books,
    Clothing,
    Toys,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Food,
        Category::Books,
        Category::Clothing,
        Category::Toys,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Food => "food",
            Category::Books => "books",
            Category::Clothing => "clothing",
            Category::Toys => "toys",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
