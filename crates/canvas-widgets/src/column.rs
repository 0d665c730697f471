//! Column descriptors for the data table.

use crate::cell::CellValue;
use ratatui::layout::Constraint;

type Accessor<T> = Box<dyn Fn(&T) -> Option<CellValue> + Send>;
type RenderFn<T> = Box<dyn Fn(Option<&CellValue>, &T) -> String + Send>;

/// Describes how one table column extracts, titles, and displays a field.
///
/// The accessor closure is the typed replacement for a stringly field
/// path: it receives the row and returns the cell value, or `None` when
/// the field is absent for that row. Absent values render as an empty
/// string and sort as the configured null extreme — they never fail.
///
/// # Example
///
/// ```ignore
/// let col = Column::new("age", "Age", |u: &User| Some(u.age.into()))
///     .sortable()
///     .with_render(|value, _| match value {
///         Some(v) => format!("{v} yrs"),
///         None => String::new(),
///     });
/// ```
pub struct Column<T> {
    key: String,
    title: String,
    accessor: Accessor<T>,
    sortable: bool,
    render: Option<RenderFn<T>>,
    width: Option<Constraint>,
}

impl<T> Column<T> {
    /// Create a column with a unique `key`, a display `title`, and the
    /// accessor that extracts its value from a row.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&T) -> Option<CellValue> + Send + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: Box::new(accessor),
            sortable: false,
            render: None,
            width: None,
        }
    }

    /// Allow sorting on this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a display transform applied to the extracted value. Without
    /// one, cells render the value's `Display` form (empty for `None`).
    pub fn with_render(
        mut self,
        f: impl Fn(Option<&CellValue>, &T) -> String + Send + 'static,
    ) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Override the column's width constraint. Columns without one share
    /// the available width equally.
    pub fn with_width(mut self, width: Constraint) -> Self {
        self.width = Some(width);
        self
    }

    /// The column's unique key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The column's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this column can be sorted on.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The explicit width constraint, if set.
    pub fn width(&self) -> Option<Constraint> {
        self.width
    }

    /// Extract this column's value from a row.
    pub fn resolve(&self, row: &T) -> Option<CellValue> {
        (self.accessor)(row)
    }

    /// The display text for this column's cell in the given row.
    pub fn display(&self, row: &T) -> String {
        let value = self.resolve(row);
        match self.render {
            Some(ref render) => render(value.as_ref(), row),
            None => value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        qty: Option<i64>,
    }

    fn name_col() -> Column<Item> {
        Column::new("name", "Name", |i: &Item| Some(i.name.clone().into()))
    }

    fn qty_col() -> Column<Item> {
        Column::new("qty", "Qty", |i: &Item| i.qty.map(CellValue::from))
    }

    #[test]
    fn display_uses_value() {
        let item = Item {
            name: "bolt".into(),
            qty: Some(7),
        };
        assert_eq!(name_col().display(&item), "bolt");
        assert_eq!(qty_col().display(&item), "7");
    }

    #[test]
    fn absent_value_displays_empty() {
        let item = Item {
            name: "nut".into(),
            qty: None,
        };
        assert_eq!(qty_col().display(&item), "");
    }

    #[test]
    fn render_transform_wins() {
        let col = qty_col().with_render(|value, _| match value {
            Some(v) => format!("{v} pcs"),
            None => "-".into(),
        });
        let some = Item {
            name: "bolt".into(),
            qty: Some(3),
        };
        let none = Item {
            name: "nut".into(),
            qty: None,
        };
        assert_eq!(col.display(&some), "3 pcs");
        assert_eq!(col.display(&none), "-");
    }

    #[test]
    fn sortable_flag_defaults_off() {
        assert!(!name_col().is_sortable());
        assert!(name_col().sortable().is_sortable());
    }
}
