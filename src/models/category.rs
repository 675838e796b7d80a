//! Category registry
//!
//! The set of categories is fixed. Transactions reference a category by its
//! id; ids not in the registry resolve to the catch-all `other` entry.

use serde::Serialize;

/// Display metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Hex color, e.g. "#ef4444"
    pub color: &'static str,
}

/// Id of the catch-all category
pub const OTHER_CATEGORY_ID: &str = "other";

/// All categories, catch-all last
pub const CATEGORIES: [Category; 9] = [
    Category {
        id: "food",
        name: "Food & Dining",
        icon: "🍕",
        color: "#ef4444",
    },
    Category {
        id: "transport",
        name: "Transportation",
        icon: "🚗",
        color: "#3b82f6",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        icon: "🛍️",
        color: "#8b5cf6",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        icon: "🎬",
        color: "#f59e0b",
    },
    Category {
        id: "bills",
        name: "Bills & Utilities",
        icon: "💡",
        color: "#10b981",
    },
    Category {
        id: "healthcare",
        name: "Healthcare",
        icon: "🏥",
        color: "#ec4899",
    },
    Category {
        id: "education",
        name: "Education",
        icon: "📚",
        color: "#6366f1",
    },
    Category {
        id: "travel",
        name: "Travel",
        icon: "✈️",
        color: "#14b8a6",
    },
    Category {
        id: OTHER_CATEGORY_ID,
        name: "Other",
        icon: "📦",
        color: "#6b7280",
    },
];

/// Look up a category by id
pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Look up a category by id, falling back to the catch-all
pub fn resolve(id: &str) -> &'static Category {
    find(id).unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

/// Look up a category by id or (case-insensitive) display name
pub fn lookup(identifier: &str) -> Option<&'static Category> {
    let identifier = identifier.trim();
    find(identifier).or_else(|| {
        CATEGORIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(identifier))
    })
}

/// Iterate over every category
pub fn all() -> impl Iterator<Item = &'static Category> {
    CATEGORIES.iter()
}
