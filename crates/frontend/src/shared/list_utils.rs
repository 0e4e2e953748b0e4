//! Client-side sorting of fetched lists.
//!
//! Filtering and pagination happen on the server; the client only re-orders
//! the page it received. [`SortableData`] holds its own copy of that page and
//! one active sort (key + direction).

use leptos::prelude::*;
use std::cmp::Ordering;

/// Row types that a table can sort by column
pub trait Sortable {
    /// Compares two rows by the given field.
    /// Unknown fields compare equal, which keeps the current order.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Numeric compare for table fields; NaN sorts as equal
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Lexicographic text compare for table fields
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Sorts the list by the given field (stable)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Local copy of a fetched page plus its current sort
#[derive(Debug, Clone, PartialEq)]
pub struct SortableData<T> {
    items: Vec<T>,
    sort: Option<SortState>,
}

impl<T> Default for SortableData<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort: None,
        }
    }
}

impl<T: Sortable> SortableData<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, sort: None }
    }

    /// Replaces the held list with a fresh fetch; the previous sort is dropped
    pub fn update_data(&mut self, items: Vec<T>) {
        self.items = items;
        self.sort = None;
    }

    /// Same key flips the direction, a new key sorts ascending
    pub fn sort(&mut self, key: &str) {
        let direction = match &self.sort {
            Some(state) if state.key == key => state.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        sort_list(&mut self.items, key, direction.is_ascending());
        self.sort = Some(SortState {
            key: key.to_string(),
            direction,
        });
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn sort_key(&self) -> &str {
        self.sort.as_ref().map(|s| s.key.as_str()).unwrap_or("")
    }

    pub fn is_ascending(&self) -> bool {
        self.sort
            .as_ref()
            .map(|s| s.direction.is_ascending())
            .unwrap_or(true)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reactive sortable store for a table component
pub fn use_sortable_data<T>() -> RwSignal<SortableData<T>>
where
    T: Sortable + Send + Sync + 'static,
{
    RwSignal::new(SortableData::default())
}

/// Sort indicator shown next to a header label
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator: active column is highlighted
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "id" => self.id.cmp(&other.id),
                "name" => cmp_text(self.name, other.name),
                "amount" => cmp_f64(self.amount, other.amount),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, name: "pisco", amount: 30.0 },
            Row { id: 1, name: "Chicha", amount: 10.0 },
            Row { id: 2, name: "anticucho", amount: 10.0 },
            Row { id: 4, name: "Ceviche", amount: 25.5 },
        ]
    }

    fn ids(data: &SortableData<Row>) -> Vec<u32> {
        data.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_new_key_sorts_ascending() {
        let mut data = SortableData::new(rows());
        data.sort("id");
        assert_eq!(ids(&data), vec![1, 2, 3, 4]);
        assert!(data.is_ascending());
        assert_eq!(data.sort_key(), "id");
    }

    #[test]
    fn test_same_key_twice_gives_descending_then_ascending() {
        let mut data = SortableData::new(rows());
        data.sort("id");
        data.sort("id");
        assert_eq!(ids(&data), vec![4, 3, 2, 1]);
        assert!(!data.is_ascending());
        data.sort("id");
        assert_eq!(ids(&data), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_switching_key_resets_to_ascending() {
        let mut data = SortableData::new(rows());
        data.sort("id");
        data.sort("id");
        data.sort("name");
        assert!(data.is_ascending());
        let names: Vec<&str> = data.items().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ceviche", "Chicha", "anticucho", "pisco"]);
    }

    #[test]
    fn test_text_order_is_lexicographic() {
        let mut data = SortableData::new(vec![
            Row { id: 1, name: "apple", amount: 1.0 },
            Row { id: 2, name: "Zeta", amount: 1.0 },
        ]);
        data.sort("name");
        let names: Vec<&str> = data.items().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Zeta", "apple"]);
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let mut data = SortableData::new(rows());
        // 1 and 2 share amount 10.0 and appear as 1, 2
        data.sort("amount");
        assert_eq!(ids(&data), vec![1, 2, 4, 3]);
        data.sort("amount");
        assert_eq!(ids(&data), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_unknown_key_keeps_order() {
        let mut data = SortableData::new(rows());
        data.sort("missing");
        assert_eq!(ids(&data), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_update_data_replaces_and_resets_sort() {
        let mut data = SortableData::new(rows());
        data.sort("id");
        data.update_data(vec![Row { id: 9, name: "x", amount: 1.0 }]);
        assert_eq!(ids(&data), vec![9]);
        assert_eq!(data.sort_state(), None);
    }

    #[test]
    fn test_source_list_is_not_touched() {
        let source = rows();
        let mut data = SortableData::new(source.clone());
        data.sort("id");
        assert_eq!(source, rows());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("id", "id", true), " ▲");
        assert_eq!(get_sort_indicator("id", "id", false), " ▼");
        assert_eq!(get_sort_indicator("name", "id", true), " ⇅");
    }
}
