use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Stress,
    Anxiety,
    Sleep,
    Relationships,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Stress,
        Category::Anxiety,
        Category::Sleep,
        Category::Relationships,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Stress => "stress",
            Category::Anxiety => "anxiety",
            Category::Sleep => "sleep",
            Category::Relationships => "relationships",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Stress => "Stress Management",
            Category::Anxiety => "Anxiety Support",
            Category::Sleep => "Sleep & Rest",
            Category::Relationships => "Relationships",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector: `all` or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Exercise,
}

impl ResourceType {
    /// Icon key the client renders next to the type badge
    pub fn icon(self) -> &'static str {
        match self {
            ResourceType::Exercise => "heart",
            ResourceType::Article => "book-open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub read_time: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}
