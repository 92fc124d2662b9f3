// ============================================================================
// Comparator resolution
// ============================================================================
//
// Each in-memory query registers the fields it can sort on. A requested field
// that is not registered falls back to the resolver's default comparator
// instead of failing. Sorting is stable, so equal elements keep insertion
// order, and no sort request means no reordering at all.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{Level, event};

/// Requested sort: field name plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sortable {
    pub field: String,
    pub ascending: bool,
}

impl Sortable {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }
}

/// Placement of absent values.
///
/// Ascending puts them last, descending first, as SQL does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    NullsFirst,
    NullsLast,
}

impl NullOrdering {
    pub fn default_for_direction(ascending: bool) -> Self {
        if ascending {
            Self::NullsLast
        } else {
            Self::NullsFirst
        }
    }
}

/// Compare two optional values, absent ones placed per `nulls`.
pub fn compare_nullable<K: Ord>(left: Option<&K>, right: Option<&K>, nulls: NullOrdering) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match nulls {
            NullOrdering::NullsFirst => Ordering::Less,
            NullOrdering::NullsLast => Ordering::Greater,
        },
        (Some(_), None) => match nulls {
            NullOrdering::NullsFirst => Ordering::Greater,
            NullOrdering::NullsLast => Ordering::Less,
        },
        (Some(left), Some(right)) => left.cmp(right),
    }
}

// Final ordering for (left, right, ascending); direction already applied.
type FieldComparator<T> = Box<dyn Fn(&T, &T, bool) -> Ordering + Send + Sync>;

struct SortField<T> {
    name: &'static str,
    compare: FieldComparator<T>,
}

pub struct SortResolver<T> {
    fields: Vec<SortField<T>>,
    fallback: Option<&'static str>,
}

impl<T> SortResolver<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            fallback: None,
        }
    }

    /// Register a field sorted by an ordered key.
    pub fn field<K, F>(mut self, name: &'static str, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.fields.push(SortField {
            name,
            compare: Box::new(move |left, right, ascending| {
                let ordering = key(left).cmp(&key(right));
                if ascending { ordering } else { ordering.reverse() }
            }),
        });
        self
    }

    /// Register a field whose key may be absent.
    pub fn nullable_field<K, F>(mut self, name: &'static str, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    {
        self.fields.push(SortField {
            name,
            compare: Box::new(move |left, right, ascending| {
                let (left, right) = (key(left), key(right));
                let nulls = NullOrdering::default_for_direction(ascending);
                let ordering = compare_nullable(left.as_ref(), right.as_ref(), nulls);
                // null placement is already direction-aware; only reverse the values
                if left.is_some() && right.is_some() && !ascending {
                    ordering.reverse()
                } else {
                    ordering
                }
            }),
        });
        self
    }

    /// Field used when the requested one is unknown. Defaults to the first registered.
    pub fn fallback(mut self, name: &'static str) -> Self {
        self.fallback = Some(name);
        self
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    fn lookup(&self, name: &str) -> Option<&SortField<T>> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    fn fallback_field(&self) -> Option<&SortField<T>> {
        match self.fallback {
            Some(name) => self.lookup(name),
            None => self.fields.first(),
        }
    }

    /// Name of the field that will actually be used for `sortable`.
    pub fn resolve(&self, sortable: &Sortable) -> Option<&'static str> {
        self.lookup(&sortable.field)
            .or_else(|| self.fallback_field())
            .map(|field| field.name)
    }

    /// Stable in-place sort. `None` leaves the order untouched.
    pub fn sort(&self, items: &mut [T], sortable: Option<&Sortable>) {
        let Some(sortable) = sortable else {
            return;
        };

        let field = match self.lookup(&sortable.field) {
            Some(field) => field,
            None => {
                let Some(fallback) = self.fallback_field() else {
                    return;
                };
                event!(
                    Level::WARN,
                    requested = %sortable.field,
                    fallback = fallback.name,
                    "unknown sort field, using default comparator"
                );
                fallback
            }
        };

        items.sort_by(|left, right| (field.compare)(left, right, sortable.ascending));
    }

    /// Convenience for owned vectors.
    pub fn sorted(&self, mut items: Vec<T>, sortable: Option<&Sortable>) -> Vec<T> {
        self.sort(&mut items, sortable);
        items
    }
}

impl<T> Default for SortResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        rank: Option<u32>,
    }

    fn row(id: &'static str, name: &'static str, rank: Option<u32>) -> Row {
        Row { id, name, rank }
    }

    fn resolver() -> SortResolver<Row> {
        SortResolver::new()
            .field("name", |r: &Row| r.name.to_lowercase())
            .nullable_field("rank", |r: &Row| r.rank)
            .fallback("name")
    }

    fn ids(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    fn rows() -> Vec<Row> {
        vec![
            row("1", "beta", Some(2)),
            row("2", "Alpha", None),
            row("3", "gamma", Some(1)),
        ]
    }

    #[test]
    fn no_sort_keeps_insertion_order() {
        assert_eq!(ids(&resolver().sorted(rows(), None)), vec!["1", "2", "3"]);
    }

    #[test]
    fn ascending_and_descending() {
        let r = resolver();
        assert_eq!(ids(&r.sorted(rows(), Some(&Sortable::asc("name")))), vec!["2", "1", "3"]);
        assert_eq!(ids(&r.sorted(rows(), Some(&Sortable::desc("name")))), vec!["3", "1", "2"]);
    }

    #[test]
    fn unknown_field_falls_back_without_failing() {
        let r = resolver();
        assert_eq!(r.resolve(&Sortable::asc("paths")), Some("name"));
        assert_eq!(ids(&r.sorted(rows(), Some(&Sortable::asc("paths")))), vec!["2", "1", "3"]);
    }

    #[test]
    fn absent_values_last_ascending_first_descending() {
        let r = resolver();
        assert_eq!(ids(&r.sorted(rows(), Some(&Sortable::asc("rank")))), vec!["3", "1", "2"]);
        assert_eq!(ids(&r.sorted(rows(), Some(&Sortable::desc("rank")))), vec!["2", "1", "3"]);
    }

    #[test]
    fn sort_is_stable() {
        let items = vec![row("1", "same", None), row("2", "same", None), row("3", "same", None)];
        assert_eq!(ids(&resolver().sorted(items, Some(&Sortable::desc("name")))), vec!["1", "2", "3"]);
    }

    #[test]
    fn field_names_are_case_insensitive() {
        assert_eq!(resolver().resolve(&Sortable::asc("NAME")), Some("name"));
    }
}
