use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::reference::Reference;

/// References grouped by the category they were found in.
///
/// Both levels are kept sorted, so iteration and the rendered report are in
/// ascending lexicographic order. A category only exists once a reference
/// has been recorded under it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceIndex {
    categories: BTreeMap<String, BTreeSet<Reference>>,
}
impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }
    /// Records `reference` under `category`. Returns `false` if it was already there.
    pub fn insert(&mut self, category: impl Into<String>, reference: Reference) -> bool {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(reference)
    }
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
    pub fn references(&self, category: &str) -> impl Iterator<Item = &Reference> {
        self.categories.get(category).into_iter().flatten()
    }
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
impl fmt::Display for ReferenceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, references) in &self.categories {
            writeln!(f)?;
            writeln!(f, "{category}:")?;
            for reference in references {
                writeln!(f, "  - {reference}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(inner: &str) -> Reference {
        Reference::from_placeholder(inner).unwrap()
    }

    #[test]
    fn empty_index_renders_nothing() {
        let index = ReferenceIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.to_string(), "");
    }

    #[test]
    fn deduplicates_per_category() {
        let mut index = ReferenceIndex::new();
        assert!(index.insert("color.brand", reference("color.base.blue")));
        assert!(!index.insert("color.brand", reference("color.base.blue")));
        assert!(index.insert("size.gap", reference("color.base.blue")));
        assert_eq!(
            index.categories().collect::<Vec<_>>(),
            vec!["color.brand", "size.gap"]
        );
        assert_eq!(index.references("color.brand").count(), 1);
        assert_eq!(index.references("missing").count(), 0);
    }

    #[test]
    fn renders_sorted_report() {
        let mut index = ReferenceIndex::new();
        index.insert("spacing.md", reference("size.base.4"));
        index.insert("color.brand", reference("color.base.red"));
        index.insert("color.brand", reference("color.base.blue"));
        assert_eq!(
            index.categories().collect::<Vec<_>>(),
            vec!["color.brand", "spacing.md"]
        );
        assert_eq!(
            index.to_string(),
            "\ncolor.brand:\n  - color.base.blue\n  - color.base.red\n\nspacing.md:\n  - size.base.4\n"
        );
    }
}
