//! Sort engine: stable row ordering by a single column.

use crate::cell::CellValue;
use crate::column::Column;
use std::cmp::Ordering;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// What repeated sort activation on the same column does after
/// descending.
///
/// The two reference behaviors for this widget family differ here, so
/// the choice is explicit configuration rather than a baked-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCycle {
    /// ascending -> descending -> ascending -> ...
    #[default]
    Toggle,
    /// ascending -> descending -> unsorted -> ascending -> ...
    Reset,
}

/// Where absent values land in ascending order. Descending reverses the
/// placement, so the policy stays consistent under direction flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortNulls {
    /// Absent values before all defined values when ascending.
    #[default]
    First,
    /// Absent values after all defined values when ascending.
    Last,
}

/// The next direction in the cycle when the same column's sort is
/// activated again. `None` means unsorted.
pub fn advance_direction(
    current: Option<SortDirection>,
    cycle: SortCycle,
) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => match cycle {
            SortCycle::Toggle => Some(SortDirection::Ascending),
            SortCycle::Reset => None,
        },
    }
}

/// Compare two defined cell values.
///
/// Numbers compare numerically, text lexicographically, booleans with
/// `false` first. Mismatched kinds fall back to comparing display
/// strings — sorting never fails on heterogeneous data.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

/// Compare two optional cell values in the ascending sense, placing
/// `None` at the extreme chosen by `nulls`.
pub fn compare_values(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    nulls: SortNulls,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_cells(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match nulls {
            SortNulls::First => Ordering::Less,
            SortNulls::Last => Ordering::Greater,
        },
        (Some(_), None) => match nulls {
            SortNulls::First => Ordering::Greater,
            SortNulls::Last => Ordering::Less,
        },
    }
}

/// Compute the stably-sorted index order for `rows` under the given
/// column and direction.
///
/// Pure: the rows themselves are untouched and the result is an index
/// permutation. Equal values keep their relative input order (stable),
/// including under descending — the comparator is reversed rather than
/// the output. With no sort column the identity order is returned.
///
/// Accessor values are extracted once per row, so the accessor runs
/// `O(n)` times rather than `O(n log n)`.
pub fn sort_order<T>(
    rows: &[T],
    column: Option<&Column<T>>,
    direction: SortDirection,
    nulls: SortNulls,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some(column) = column else {
        return order;
    };

    let keys: Vec<Option<CellValue>> = rows.iter().map(|row| column.resolve(row)).collect();
    order.sort_by(|&a, &b| {
        let ord = compare_values(keys[a].as_ref(), keys[b].as_ref(), nulls);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        label: &'static str,
        score: Option<i64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { label: "c", score: Some(30) },
            Row { label: "a", score: Some(10) },
            Row { label: "d", score: None },
            Row { label: "b", score: Some(20) },
        ]
    }

    fn score_col() -> Column<Row> {
        Column::new("score", "Score", |r: &Row| r.score.map(CellValue::from)).sortable()
    }

    fn label_col() -> Column<Row> {
        Column::new("label", "Label", |r: &Row| Some(r.label.into())).sortable()
    }

    fn labels(rows: &[Row], order: &[usize]) -> Vec<&'static str> {
        order.iter().map(|&i| rows[i].label).collect()
    }

    // ── Direction cycle ──

    #[test]
    fn cycle_starts_ascending() {
        assert_eq!(
            advance_direction(None, SortCycle::Toggle),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            advance_direction(None, SortCycle::Reset),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn cycle_toggle_alternates() {
        assert_eq!(
            advance_direction(Some(SortDirection::Ascending), SortCycle::Toggle),
            Some(SortDirection::Descending)
        );
        assert_eq!(
            advance_direction(Some(SortDirection::Descending), SortCycle::Toggle),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn cycle_reset_returns_to_unsorted() {
        assert_eq!(
            advance_direction(Some(SortDirection::Descending), SortCycle::Reset),
            None
        );
    }

    // ── Ordering ──

    #[test]
    fn no_column_is_identity() {
        let rows = rows();
        let order = sort_order(&rows, None, SortDirection::Ascending, SortNulls::First);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ascending_numbers_with_null_first() {
        let rows = rows();
        let order = sort_order(
            &rows,
            Some(&score_col()),
            SortDirection::Ascending,
            SortNulls::First,
        );
        assert_eq!(labels(&rows, &order), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn descending_reverses_defined_values() {
        let rows = rows();
        let asc = sort_order(
            &rows,
            Some(&score_col()),
            SortDirection::Ascending,
            SortNulls::First,
        );
        let desc = sort_order(
            &rows,
            Some(&score_col()),
            SortDirection::Descending,
            SortNulls::First,
        );
        // Null pinned to the opposite end; defined values exactly reversed.
        assert_eq!(labels(&rows, &desc), vec!["c", "b", "a", "d"]);
        let defined_asc: Vec<_> = asc.iter().filter(|&&i| rows[i].score.is_some()).collect();
        let mut defined_desc: Vec<_> =
            desc.iter().filter(|&&i| rows[i].score.is_some()).collect();
        defined_desc.reverse();
        assert_eq!(defined_asc, defined_desc);
    }

    #[test]
    fn nulls_last_policy() {
        let rows = rows();
        let order = sort_order(
            &rows,
            Some(&score_col()),
            SortDirection::Ascending,
            SortNulls::Last,
        );
        assert_eq!(labels(&rows, &order), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let rows = rows();
        let order = sort_order(
            &rows,
            Some(&label_col()),
            SortDirection::Ascending,
            SortNulls::First,
        );
        let reordered: Vec<Row> = order
            .iter()
            .map(|&i| Row {
                label: rows[i].label,
                score: rows[i].score,
            })
            .collect();
        let again = sort_order(
            &reordered,
            Some(&label_col()),
            SortDirection::Ascending,
            SortNulls::First,
        );
        assert_eq!(again, vec![0, 1, 2, 3]);
    }

    #[test]
    fn equal_values_keep_input_order() {
        struct Pair {
            group: i64,
            tag: &'static str,
        }
        let rows = vec![
            Pair { group: 1, tag: "first" },
            Pair { group: 0, tag: "zero" },
            Pair { group: 1, tag: "second" },
            Pair { group: 1, tag: "third" },
        ];
        let col = Column::new("group", "Group", |p: &Pair| Some(p.group.into())).sortable();
        let order = sort_order(&rows, Some(&col), SortDirection::Ascending, SortNulls::First);
        let tags: Vec<_> = order.iter().map(|&i| rows[i].tag).collect();
        assert_eq!(tags, vec!["zero", "first", "second", "third"]);

        // Stability holds under descending too: ties stay in input order.
        let order = sort_order(&rows, Some(&col), SortDirection::Descending, SortNulls::First);
        let tags: Vec<_> = order.iter().map(|&i| rows[i].tag).collect();
        assert_eq!(tags, vec!["first", "second", "third", "zero"]);
    }

    // ── Value comparison ──

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(
            compare_cells(&CellValue::Int(9), &CellValue::Int(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&CellValue::Int(2), &CellValue::Float(1.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_kinds_fall_back_to_string_comparison() {
        // "10" < "9" lexicographically — the fallback is deterministic,
        // not numeric.
        assert_eq!(
            compare_cells(&CellValue::Int(10), &CellValue::Text("9".into())),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&CellValue::Bool(true), &CellValue::Text("abc".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn bools_compare_false_first() {
        assert_eq!(
            compare_cells(&CellValue::Bool(false), &CellValue::Bool(true)),
            Ordering::Less
        );
    }
}
