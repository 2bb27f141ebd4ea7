use crate::models::resource::{CategoryFilter, ResourceRecord};

/// Search text plus category selector applied to the catalog.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ResourceFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// True when either criterion narrows the catalog, so an empty result can
    /// be told apart from an unfiltered one.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    pub fn matches(&self, record: &ResourceRecord) -> bool {
        self.category.matches(record.category) && matches_search(record, &self.search)
    }

    /// Matching records in catalog order.
    pub fn apply<'a>(&self, catalog: &'a [ResourceRecord]) -> Vec<&'a ResourceRecord> {
        catalog.iter().filter(|r| self.matches(r)).collect()
    }
}

fn matches_search(record: &ResourceRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::Category;
    use crate::seed;

    fn ids(records: &[&ResourceRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_filter_returns_whole_catalog() {
        let catalog = seed::catalog();
        let filter = ResourceFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_search_sleep_matches_title_description_or_tags() {
        let catalog = seed::catalog();
        let filter = ResourceFilter::new("sleep", CategoryFilter::All);
        let found = filter.apply(&catalog);
        assert_eq!(ids(&found), vec![3, 6]);

        let expected: Vec<u32> = catalog
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains("sleep")
                    || r.description.to_lowercase().contains("sleep")
                    || r.tags.iter().any(|t| t.to_lowercase().contains("sleep"))
            })
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&found), expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = seed::catalog();
        let upper = ResourceFilter::new("SLEEP", CategoryFilter::All);
        let lower = ResourceFilter::new("sleep", CategoryFilter::All);
        assert_eq!(ids(&upper.apply(&catalog)), ids(&lower.apply(&catalog)));

        let cbt = ResourceFilter::new("cbt", CategoryFilter::All);
        assert_eq!(ids(&cbt.apply(&catalog)), vec![7]);
    }

    #[test]
    fn test_category_only() {
        let catalog = seed::catalog();
        let filter = ResourceFilter::new("", CategoryFilter::Only(Category::Anxiety));
        let found = filter.apply(&catalog);
        assert!(filter.is_active());
        assert_eq!(ids(&found), vec![2, 7]);
        assert!(found.iter().all(|r| r.category == Category::Anxiety));
    }

    #[test]
    fn test_empty_result_with_active_filter() {
        let catalog = seed::catalog();
        let filter = ResourceFilter::new("breathing", CategoryFilter::Only(Category::Sleep));
        assert!(filter.apply(&catalog).is_empty());
        assert!(filter.is_active());
    }
}
