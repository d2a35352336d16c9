//! Generic query primitives the domain views are built from. Each one is
//! total: unmatched input produces an empty or zero-valued result.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use chrono::{DateTime, NaiveDate};

use crate::models::{AcademicContent, ApprovalStatus, Course};

/// A filter value that is either the "all" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::All, Filter::Only)
    }
}

/// Items whose projected field equals `value`, in input order.
pub fn filter_by_field<'a, T, K, F>(items: &'a [T], field: F, value: &Filter<K>) -> Vec<&'a T>
where
    K: PartialEq,
    F: Fn(&'a T) -> K,
{
    items
        .iter()
        .filter(|item| value.matches(&field(*item)))
        .collect()
}

/// Parse the date formats found in the dataset: plain `YYYY-MM-DD` or a full
/// RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Newest first. Undated items go last; ties keep their input order.
pub fn sort_by_date_descending<'a, T, I, F>(items: I, date: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    let mut sorted: Vec<&'a T> = items.into_iter().collect();
    sorted.sort_by_key(|item| Reverse(parse_date(date(*item))));
    sorted
}

/// Group items by key. Only keys that occur are present; each group keeps
/// input order.
pub fn group_by<'a, T, K, I, F>(items: I, key: F) -> BTreeMap<K, Vec<&'a T>>
where
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// The first item whose id equals `id`, or `None`.
pub fn cross_reference_lookup<'a, T, F>(items: &'a [T], id_of: F, id: &str) -> Option<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    items.iter().find(|item| id_of(*item) == id)
}

pub fn aggregate_sum<'a, T, N, I, F>(items: I, value: F) -> N
where
    T: 'a,
    N: Sum<N>,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> N,
{
    items.into_iter().map(value).sum()
}

pub fn distinct_values<'a, T, K, I, F>(items: I, value: F) -> HashSet<K>
where
    T: 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
{
    items.into_iter().map(value).collect()
}

/// Placement of items into a `column × row` grid.
///
/// Cells are keyed `"{column}-{row}"`. Every combination of the supplied rows
/// and columns has an entry, holding the first matching item or `None`.
#[derive(Debug, Clone)]
pub struct Grid<'a, T> {
    cells: HashMap<String, Option<&'a T>>,
}

impl<'a, T> Grid<'a, T> {
    pub fn key(column: impl Display, row: impl Display) -> String {
        format!("{column}-{row}")
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.cells.get(key).copied().flatten()
    }

    pub fn cell(&self, column: impl Display, row: impl Display) -> Option<&'a T> {
        self.get(&Self::key(column, row))
    }

    /// Total number of cells, occupied or not.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn occupied(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_some()).count()
    }
}

/// Place `items` into the grid spanned by `rows` and `columns`. No scoping is
/// done here; callers filter `items` first.
pub fn build_grid<'a, T, R, C, F>(
    rows: &[R],
    columns: &[C],
    items: &[&'a T],
    matches: F,
) -> Grid<'a, T>
where
    R: Display,
    C: Display,
    F: Fn(&T, &C, &R) -> bool,
{
    let mut cells = HashMap::with_capacity(rows.len() * columns.len());
    for column in columns {
        for row in rows {
            let found = items
                .iter()
                .copied()
                .find(|item| matches(*item, column, row));
            cells.insert(Grid::<T>::key(column, row), found);
        }
    }
    Grid { cells }
}

/// Percentage of courses with a faculty assigned, rounded; 0 when empty.
pub fn compute_assignment_rate<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    let (total, assigned) = courses
        .into_iter()
        .fold((0usize, 0usize), |(total, assigned), course| {
            (total + 1, assigned + usize::from(course.is_assigned()))
        });
    if total == 0 {
        return 0;
    }
    (assigned as f64 * 100.0 / total as f64).round() as u32
}

/// Per-status counts. All four statuses are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApprovalCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub needs_revision: usize,
}

impl ApprovalCounts {
    pub fn get(&self, status: ApprovalStatus) -> usize {
        match status {
            ApprovalStatus::Pending => self.pending,
            ApprovalStatus::Approved => self.approved,
            ApprovalStatus::Rejected => self.rejected,
            ApprovalStatus::NeedsRevision => self.needs_revision,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected + self.needs_revision
    }

    /// `(status, count)` in canonical status order.
    pub fn iter(&self) -> impl Iterator<Item = (ApprovalStatus, usize)> + '_ {
        ApprovalStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    fn bump(&mut self, status: ApprovalStatus) {
        match status {
            ApprovalStatus::Pending => self.pending += 1,
            ApprovalStatus::Approved => self.approved += 1,
            ApprovalStatus::Rejected => self.rejected += 1,
            ApprovalStatus::NeedsRevision => self.needs_revision += 1,
        }
    }
}

pub fn compute_approval_counts<'a, I>(items: I) -> ApprovalCounts
where
    I: IntoIterator<Item = &'a AcademicContent>,
{
    let mut counts = ApprovalCounts::default();
    for item in items {
        counts.bump(item.approval_status);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        group: u32,
        date: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", group: 2, date: "2024-01-14" },
            Row { id: "b", group: 1, date: "" },
            Row { id: "c", group: 2, date: "2024-02-08" },
            Row { id: "d", group: 1, date: "2024-01-14" },
        ]
    }

    #[test]
    fn filter_all_returns_everything_in_order() {
        let rows = rows();
        let all = filter_by_field(&rows, |r| r.group, &Filter::All);
        assert_eq!(all.len(), rows.len());
        assert!(all.iter().zip(&rows).all(|(a, b)| std::ptr::eq(*a, b)));

        let ones = filter_by_field(&rows, |r| r.group, &Filter::Only(1));
        let ids: Vec<_> = ones.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b", "d"]);
    }

    #[test]
    fn sort_puts_undated_last_and_is_stable() {
        let rows = rows();
        let sorted = sort_by_date_descending(&rows, |r| r.date);
        let ids: Vec<_> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["c", "a", "d", "b"]);
    }

    #[test]
    fn parse_date_accepts_timestamps() {
        assert_eq!(
            parse_date("2024-02-06T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 2, 6)
        );
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn group_by_only_creates_present_keys() {
        let rows = rows();
        let groups = group_by(&rows, |r| r.group);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(groups[&2][0].id, "a");
        assert!(!groups.contains_key(&3));
    }

    #[test]
    fn lookup_misses_are_none() {
        let rows = rows();
        assert_eq!(cross_reference_lookup(&rows, |r| r.id, "c").map(|r| r.group), Some(2));
        assert!(cross_reference_lookup(&rows, |r| r.id, "zz").is_none());
    }

    #[test]
    fn sums_and_distincts() {
        let rows = rows();
        let total: u32 = aggregate_sum(&rows, |r| r.group);
        assert_eq!(total, 6);
        let empty: Vec<Row> = Vec::new();
        assert_eq!(aggregate_sum::<_, u32, _, _>(&empty, |r| r.group), 0);
        assert_eq!(distinct_values(&rows, |r| r.group).len(), 2);
    }

    #[test]
    fn grid_places_first_match_only() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let grid = build_grid(&[1u32, 2], &["x", "y"], &refs, |item, column, row| {
            *column == "x" && item.group == *row
        });
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.occupied(), 2);
        assert_eq!(grid.cell("x", 2).map(|r| r.id), Some("a"));
        assert_eq!(grid.get("x-1").map(|r| r.id), Some("b"));
        assert!(grid.cell("y", 1).is_none());
        assert!(grid.cell("z", 1).is_none());
    }

    #[test]
    fn filter_from_option() {
        assert_eq!(Filter::from(None::<u32>), Filter::All);
        assert_eq!(Filter::from(Some(3)), Filter::Only(3));
    }
}
