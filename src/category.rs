//! Event categories and the category registry.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A fixed classification tag with a display name and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string(), color: color.to_string() }
    }
}

/// The stock registry: work, personal, health, social, in that order.
/// Declaration order matters: the first entry is the default category.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("work", "工作", "#1e40af"),
        Category::new("personal", "個人", "#059669"),
        Category::new("health", "健康", "#d97706"),
        Category::new("social", "社交", "#dc2626"),
    ]
}

/// Ordered lookup of categories by id. Construction enforces the one
/// structural requirement: at least one category, which serves as default.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(anyhow!("Category registry requires at least one category"));
        }
        Ok(Self { categories })
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The first declared category.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self { categories: default_categories() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = CategoryRegistry::default();
        let ids: Vec<&str> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["work", "personal", "health", "social"]);
        assert_eq!(registry.default_category().id, "work");
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.get("health").unwrap().name, "健康");
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(CategoryRegistry::new(Vec::new()).is_err());
    }

    #[test]
    fn test_single_category_registry() {
        let registry =
            CategoryRegistry::new(vec![Category::new("misc", "其他", "#64748b")]).unwrap();
        assert_eq!(registry.default_category().id, "misc");
    }
}
