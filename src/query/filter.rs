// ============================================================================
// Predicate composition
// ============================================================================
//
// A query is the conjunction of independently optional criteria. Each unset
// criterion contributes nothing, so a `Filter` built from an empty criteria
// object matches everything.
//
// ============================================================================

use super::pattern::matches_text;
use crate::storage::Storage;

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

pub struct Filter<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T: 'a> Filter<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Unconditional predicate.
    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Predicate applied only when `condition` holds.
    pub fn when<P>(self, condition: bool, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        if condition { self.and(predicate) } else { self }
    }

    /// Field equals `expected`.
    pub fn eq<V, F>(self, expected: Option<&'a V>, extract: F) -> Self
    where
        V: PartialEq + ?Sized + 'a,
        F: Fn(&T) -> &V + 'a,
    {
        match expected {
            Some(expected) => self.and(move |item| extract(item) == expected),
            None => self,
        }
    }

    /// Optional field equals `expected`. An absent field never matches a set criterion.
    pub fn eq_opt<V, F>(self, expected: Option<&'a V>, extract: F) -> Self
    where
        V: PartialEq + ?Sized + 'a,
        F: Fn(&T) -> Option<&V> + 'a,
    {
        match expected {
            Some(expected) => self.and(move |item| extract(item) == Some(expected)),
            None => self,
        }
    }

    /// Field is one of `candidates`. An empty candidate set matches nothing.
    pub fn one_of<V, F>(self, candidates: Option<&'a [V]>, extract: F) -> Self
    where
        V: PartialEq + 'a,
        F: Fn(&T) -> &V + 'a,
    {
        match candidates {
            Some(candidates) => self.and(move |item| candidates.contains(extract(item))),
            None => self,
        }
    }

    /// Multi-valued field shares at least one value with `candidates`.
    pub fn any_of<V, F>(self, candidates: Option<&'a [V]>, extract: F) -> Self
    where
        V: PartialEq + 'a,
        F: Fn(&T) -> &[V] + 'a,
    {
        match candidates {
            Some(candidates) => self.and(move |item| {
                extract(item)
                    .iter()
                    .any(|value| candidates.contains(value))
            }),
            None => self,
        }
    }

    /// Inclusive range; either bound may be absent.
    pub fn within<V, F>(self, from: Option<V>, to: Option<V>, extract: F) -> Self
    where
        V: PartialOrd + 'a,
        F: Fn(&T) -> V + 'a,
    {
        if from.is_none() && to.is_none() {
            return self;
        }
        self.and(move |item| {
            let value = extract(item);
            from.as_ref().is_none_or(|from| value >= *from)
                && to.as_ref().is_none_or(|to| value <= *to)
        })
    }

    /// Case-insensitive wildcard text match, see [`matches_text`].
    pub fn matching<F>(self, pattern: Option<&'a str>, extract: F) -> Self
    where
        F: Fn(&T) -> &str + 'a,
    {
        match pattern {
            Some(pattern) if !pattern.is_empty() => {
                self.and(move |item| matches_text(extract(item), pattern))
            }
            _ => self,
        }
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Number of active criteria.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<'a, T: Clone + 'a> Filter<'a, T> {
    /// Matching items of `storage`, in insertion order.
    pub fn select(&self, storage: &Storage<T>) -> Vec<T> {
        storage.filter(|item| self.matches(item))
    }

    pub fn apply(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

impl<'a, T: 'a> Default for Filter<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
