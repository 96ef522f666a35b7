//! Sort direction, the header-click state machine, and order computation.
//!
//! The table moves through three states: unsorted (page just rendered),
//! sorted ascending on some column, sorted descending on some column.
//! Clicking the active column's header flips direction; clicking any
//! other header sorts that column ascending. The row cache keeps the
//! ascending order of the active column, so a direction flip is a
//! reversed traversal, not a resort.

use std::cmp::Ordering;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// The value written to the table's `order` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// What a header click requires of the row cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reorder {
    /// A different column became active: resort the cache ascending.
    Resort(usize),
    /// Same column, direction flipped: traverse the cache in reverse.
    Reverse,
}

/// Sort state of one table: active column and direction.
///
/// Starts unsorted (`column == None`); the first click always resorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortState {
    /// Index of the active sort column, if any.
    pub column: Option<usize>,
    /// Direction of the active sort. Meaningful once `column` is set.
    pub order: SortOrder,
}

impl SortState {
    /// Apply a header click and report the required cache operation.
    pub fn click(&mut self, column: usize) -> Reorder {
        match self.column {
            Some(active) if active == column => {
                self.order = self.order.flipped();
                Reorder::Reverse
            }
            _ => {
                self.column = Some(column);
                self.order = SortOrder::Ascending;
                Reorder::Resort(column)
            }
        }
    }

    /// The value for the table's `order` attribute: empty until the
    /// first sort, then `"asc"` or `"desc"`.
    #[must_use]
    pub fn order_attr(&self) -> &'static str {
        match self.column {
            Some(_) => self.order.as_attr(),
            None => "",
        }
    }
}

/// Compute the ascending permutation of `keys` as a list of indices.
///
/// The sort is stable: rows with equal keys keep their relative order
/// from the previous arrangement.
#[must_use]
pub fn sort_permutation<K: Ord>(keys: &[K]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| match (keys.get(a), keys.get(b)) {
        (Some(ka), Some(kb)) => ka.cmp(kb),
        _ => Ordering::Equal,
    });
    order
}
