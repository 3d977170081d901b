use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "my projects")]
    MyProjects,
    #[serde(rename = "vibes")]
    Vibes,
    #[serde(rename = "community")]
    Community,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MyProjects => "my projects",
            Category::Vibes => "vibes",
            Category::Community => "community",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "my projects" => Ok(Category::MyProjects),
            "vibes" => Ok(Category::Vibes),
            "community" => Ok(Category::Community),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// A card on the projects page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub last_updated: String,
    pub progress: u8,
    pub starred: bool,
}

impl CatalogEntry {
    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.kind.to_lowercase().contains(query)
    }
}

/// Entries in `category` whose title, description or type contains `query`,
/// ignoring case. An empty query keeps the whole category.
pub fn filter_catalog<'a>(
    entries: &'a [CatalogEntry],
    category: Category,
    query: &str,
) -> Vec<&'a CatalogEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.category == category)
        .filter(|entry| entry.matches(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, title: &str, kind: &str, category: Category) -> CatalogEntry {
        CatalogEntry {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            category,
            kind: kind.to_string(),
            last_updated: "2 days ago".to_string(),
            progress: 50,
            starred: false,
        }
    }

    fn entries() -> Vec<CatalogEntry> {
        vec![
            entry(1, "Structural Analysis AI", "Structural Engineering", Category::MyProjects),
            entry(2, "Circuit Designer Pro", "Electrical Systems", Category::MyProjects),
            entry(3, "Quantum Circuit Optimizer", "Quantum Computing", Category::Vibes),
            entry(4, "Open Source CAD Library", "Open Source", Category::Community),
        ]
    }

    #[test]
    fn test_filter_by_category() {
        let entries = entries();
        let ids: Vec<u32> = filter_catalog(&entries, Category::MyProjects, "")
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_category_scoped() {
        let entries = entries();
        let hits = filter_catalog(&entries, Category::MyProjects, "CIRCUIT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        let hits = filter_catalog(&entries, Category::MyProjects, "electrical");
        assert_eq!(hits[0].id, 2);

        assert!(filter_catalog(&entries, Category::Community, "circuit").is_empty());
    }

    #[test]
    fn test_entry_json_uses_type_field() {
        let value = serde_json::to_value(entry(9, "X", "AI/ML", Category::MyProjects)).unwrap();
        assert_eq!(value["type"], "AI/ML");
        assert_eq!(value["category"], "my projects");
    }
}
