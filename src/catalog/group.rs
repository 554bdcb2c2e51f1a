use super::model::CatalogEntry;

/// Entries sharing one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

impl CategoryGroup {
    /// Key derived from the category name for tab ids.
    pub fn slug(&self) -> String {
        category_slug(&self.name)
    }
}

/// Group entries by exact category name.
///
/// Categories appear in first-seen order, which is also the tab order.
/// An empty catalog yields no groups.
pub fn group_by_category(entries: &[CatalogEntry]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.name == entry.category) {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(CategoryGroup {
                name: entry.category.clone(),
                entries: vec![entry.clone()],
            }),
        }
    }
    groups
}

/// Lowercase the name and collapse every run of characters outside
/// `[a-z0-9]` into a single `-`.
pub fn category_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }
    slug
}
