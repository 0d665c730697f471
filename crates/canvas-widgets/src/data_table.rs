//! Tabular data display with column sorting, pagination, and row
//! selection.
//!
//! `DataTable` derives everything it renders from the caller's row set:
//! a cached sort order (recomputed only when the rows or the sort state
//! change), a page slice over that order, and a set of selected row
//! identifiers. Caller data is never mutated.

use std::collections::HashSet;

use canvas_core::command::Command;
use canvas_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell as RatatuiCell, Paragraph, Row, Table as RatatuiTable, TableState,
};
use ratatui::Frame;

use crate::column::Column;
use crate::key::{Binding, KeyCombination};
use crate::pagination::{PageState, Pagination};
use crate::row_selection::{RowSelection, SelectMode};
use crate::sort::{advance_direction, sort_order, SortCycle, SortDirection, SortNulls};

/// Messages for the data table.
///
/// `KeyPress` flows in from the parent; the remaining variants flow out
/// — the table returns them via [`Command::message`] and the parent
/// observes them as its callback surface.
#[derive(Debug, Clone)]
pub enum Message<T> {
    /// A key press event forwarded to the table for handling.
    KeyPress(KeyEvent),
    /// The row under the cursor was activated (Enter).
    RowClicked(T),
    /// The selection changed; carries the selected rows materialized in
    /// data order.
    SelectionChanged(Vec<T>),
    /// A page or page-size change was requested. Emitted only in
    /// controlled pagination mode; the caller applies it and feeds the
    /// new state back via
    /// [`set_pagination_state`](DataTable::set_pagination_state).
    PaginationChanged {
        /// Requested page, 1-based.
        page: usize,
        /// Requested page size.
        page_size: usize,
    },
}

/// Configurable key bindings for the data table.
pub struct TableKeyBindings {
    /// Move the row cursor up. Default: Up, k
    pub up: Binding,
    /// Move the row cursor down. Default: Down, j
    pub down: Binding,
    /// Jump to the first visible row. Default: Home
    pub first_row: Binding,
    /// Jump to the last visible row. Default: End
    pub last_row: Binding,
    /// Move the column cursor left. Default: Left, h
    pub col_left: Binding,
    /// Move the column cursor right. Default: Right, l
    pub col_right: Binding,
    /// Next column (wrapping). Default: Tab
    pub col_next: Binding,
    /// Cycle sort on the column under the column cursor. Default: s
    pub sort: Binding,
    /// Toggle the cursor row's checkbox. Default: Space
    pub toggle: Binding,
    /// Toggle the header (all/none) checkbox. Default: a
    pub toggle_all: Binding,
    /// Activate (click) the cursor row. Default: Enter
    pub activate: Binding,
    /// Next page. Default: n, ]
    pub next_page: Binding,
    /// Previous page. Default: p, [
    pub prev_page: Binding,
    /// First page. Default: <
    pub first_page: Binding,
    /// Last page. Default: >
    pub last_page: Binding,
    /// Cycle through the page-size options. Default: z
    pub cycle_page_size: Binding,
}

impl Default for TableKeyBindings {
    fn default() -> Self {
        Self {
            up: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::new(KeyCode::Char('k')),
                ],
                "Up",
            ),
            down: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::new(KeyCode::Char('j')),
                ],
                "Down",
            ),
            first_row: Binding::new(KeyCombination::new(KeyCode::Home), "First row"),
            last_row: Binding::new(KeyCombination::new(KeyCode::End), "Last row"),
            col_left: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Left),
                    KeyCombination::new(KeyCode::Char('h')),
                ],
                "Column left",
            ),
            col_right: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Right),
                    KeyCombination::new(KeyCode::Char('l')),
                ],
                "Column right",
            ),
            col_next: Binding::new(KeyCombination::new(KeyCode::Tab), "Next column"),
            sort: Binding::new(KeyCombination::new(KeyCode::Char('s')), "Sort column"),
            toggle: Binding::new(KeyCombination::new(KeyCode::Char(' ')), "Toggle row"),
            toggle_all: Binding::new(KeyCombination::new(KeyCode::Char('a')), "Toggle all"),
            activate: Binding::new(KeyCombination::new(KeyCode::Enter), "Activate row"),
            next_page: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Char('n')),
                    KeyCombination::new(KeyCode::Char(']')),
                ],
                "Next page",
            ),
            prev_page: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Char('p')),
                    KeyCombination::new(KeyCode::Char('[')),
                ],
                "Previous page",
            ),
            first_page: Binding::new(KeyCombination::new(KeyCode::Char('<')), "First page"),
            last_page: Binding::new(KeyCombination::new(KeyCode::Char('>')), "Last page"),
            cycle_page_size: Binding::new(KeyCombination::new(KeyCode::Char('z')), "Page size"),
        }
    }
}

/// Style configuration for the data table.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Style applied to column header cells.
    pub header: Style,
    /// Base style for data rows.
    pub normal: Style,
    /// Style applied to the row under the cursor.
    pub cursor: Style,
    /// Style applied to selected (checked) rows.
    pub selected: Style,
    /// Style applied to the header cell of the column under the column
    /// cursor.
    pub active_column: Style,
    /// Style for the loading and empty-state placeholder lines.
    pub placeholder: Style,
    /// Style for the pagination footer line.
    pub footer: Style,
    /// Border style when the table has focus.
    pub focused_border: Style,
    /// Border style when the table does not have focus.
    pub unfocused_border: Style,
    /// Symbol rendered to the left of the cursor row.
    pub highlight_symbol: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            normal: Style::default(),
            cursor: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Green),
            active_column: Style::default().add_modifier(Modifier::UNDERLINED),
            placeholder: Style::default().fg(Color::DarkGray),
            footer: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            unfocused_border: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

type RowId<T> = Box<dyn Fn(&T) -> Option<String> + Send>;

/// A data table deriving its visible rows from caller-supplied data.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name", |u: &User| Some(u.name.clone().into())).sortable(),
///     Column::new("age", "Age", |u: &User| Some(u.age.into())).sortable(),
/// ];
/// let mut table = DataTable::new(columns)
///     .with_rows(users)
///     .with_row_id(|u: &User| Some(u.id.to_string()))
///     .with_select_mode(SelectMode::Multiple)
///     .with_pagination(10);
/// table.focus();
/// ```
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    row_id: Option<RowId<T>>,
    // Cached sort permutation over `rows`; refreshed when rows or the
    // sort state change, never during view.
    order: Vec<usize>,
    sort: Option<(String, SortDirection)>,
    sort_cycle: SortCycle,
    sort_nulls: SortNulls,
    pagination: Pagination,
    selection: RowSelection,
    cursor: usize,
    col_cursor: usize,
    loading: bool,
    loading_text: String,
    empty_text: String,
    title: String,
    style: TableStyle,
    bindings: TableKeyBindings,
    focus: bool,
}

impl<T: Clone + Send + 'static> DataTable<T> {
    /// Create a table with the given column set and no rows.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_id: None,
            order: Vec::new(),
            sort: None,
            sort_cycle: SortCycle::default(),
            sort_nulls: SortNulls::default(),
            pagination: Pagination::Off,
            selection: RowSelection::default(),
            cursor: 0,
            col_cursor: 0,
            loading: false,
            loading_text: "Loading...".to_string(),
            empty_text: "No results found.".to_string(),
            title: String::new(),
            style: TableStyle::default(),
            bindings: TableKeyBindings::default(),
            focus: false,
        }
    }

    /// Set the data rows (builder variant of [`set_rows`](Self::set_rows)).
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the row identity accessor. Selection requires one: rows whose
    /// accessor returns `None` can never be selected.
    pub fn with_row_id(mut self, f: impl Fn(&T) -> Option<String> + Send + 'static) -> Self {
        self.row_id = Some(Box::new(f));
        self
    }

    /// Set the selection cardinality.
    pub fn with_select_mode(mut self, mode: SelectMode) -> Self {
        self.selection = RowSelection::new(mode);
        self
    }

    /// Enable self-managed pagination with the given page size.
    pub fn with_pagination(mut self, page_size: usize) -> Self {
        let mut state = PageState::new(page_size);
        state.set_total(self.rows.len());
        self.pagination = Pagination::Managed(state);
        self
    }

    /// Enable externally-managed pagination with caller-owned state.
    /// Navigation emits [`Message::PaginationChanged`] instead of
    /// mutating; feed applied state back with
    /// [`set_pagination_state`](Self::set_pagination_state).
    pub fn with_controlled_pagination(mut self, state: PageState) -> Self {
        self.pagination = Pagination::Controlled(state);
        self
    }

    /// Override the page-size options of a self-managed pagination state.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        if let Pagination::Managed(ref mut state) = self.pagination {
            state.page_size_options = options;
        }
        self
    }

    /// Set what repeated sort activation does after descending.
    pub fn with_sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Set where absent values land when sorting.
    pub fn with_sort_nulls(mut self, nulls: SortNulls) -> Self {
        self.sort_nulls = nulls;
        self
    }

    /// Override the loading placeholder text.
    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    /// Override the empty-state text.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Set the table border title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the table style configuration.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Set custom key bindings.
    pub fn with_key_bindings(mut self, bindings: TableKeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Give focus to the table, enabling keyboard handling.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove focus from the table.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Replace the data rows.
    ///
    /// Re-derives the sort order, keeps the self-managed page in range,
    /// clamps the cursor, and prunes selected identifiers that no longer
    /// resolve to any row. Pruning does not emit
    /// [`Message::SelectionChanged`] — no interaction happened.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.refresh_order();
        if let Some(ref id) = self.row_id {
            let live: HashSet<String> = self.rows.iter().filter_map(|r| id(r)).collect();
            self.selection.retain(|k| live.contains(k));
        }
        if let Pagination::Managed(ref mut state) = self.pagination {
            state.set_total(self.rows.len());
        }
        self.clamp_cursor();
    }

    /// Set the caller-supplied loading flag. While set, the body renders
    /// the loading placeholder regardless of data.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the loading flag is set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply caller-owned pagination state (controlled mode feedback).
    pub fn set_pagination_state(&mut self, state: PageState) {
        match self.pagination {
            Pagination::Controlled(ref mut current) | Pagination::Managed(ref mut current) => {
                *current = state;
            }
            Pagination::Off => return,
        }
        self.clamp_cursor();
    }

    /// The full data rows, in caller order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The active sort, if any.
    pub fn sort_state(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|(k, d)| (k.as_str(), *d))
    }

    /// The current pagination state, if pagination is enabled.
    pub fn page_state(&self) -> Option<&PageState> {
        self.pagination.state()
    }

    /// The visible rows: sorted, then sliced to the current page.
    pub fn visible_rows(&self) -> Vec<&T> {
        self.visible_indices().iter().map(|&i| &self.rows[i]).collect()
    }

    /// The selected rows materialized in data order.
    pub fn selected_rows(&self) -> Vec<T> {
        let Some(ref id) = self.row_id else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter(|row| id(row).is_some_and(|k| self.selection.is_selected(&k)))
            .cloned()
            .collect()
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Whether every visible row is selected.
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_keys())
    }

    /// Whether the selection is partial (drives the indeterminate header
    /// checkbox).
    pub fn some_selected(&self) -> bool {
        self.selection.some_selected(&self.visible_keys())
    }

    /// The row cursor position within the visible slice.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> Option<&T> {
        self.cursor_row_index().map(|i| &self.rows[i])
    }

    /// The column cursor position.
    pub fn column_cursor(&self) -> usize {
        self.col_cursor
    }

    /// Move the column cursor to `index`, clamped to the column count.
    pub fn set_column_cursor(&mut self, index: usize) {
        if !self.columns.is_empty() {
            self.col_cursor = index.min(self.columns.len() - 1);
        }
    }

    fn selectable(&self) -> bool {
        self.selection.mode() != SelectMode::Off
    }

    fn visible_indices(&self) -> &[usize] {
        match self.pagination.state() {
            Some(state) => state.slice(&self.order),
            None => &self.order,
        }
    }

    fn visible_keys(&self) -> Vec<String> {
        let Some(ref id) = self.row_id else {
            return Vec::new();
        };
        self.visible_indices()
            .iter()
            .filter_map(|&i| id(&self.rows[i]))
            .collect()
    }

    fn cursor_row_index(&self) -> Option<usize> {
        self.visible_indices().get(self.cursor).copied()
    }

    fn row_key(&self, row: &T) -> Option<String> {
        self.row_id.as_ref().and_then(|id| id(row))
    }

    fn refresh_order(&mut self) {
        let column = self
            .sort
            .as_ref()
            .and_then(|(key, _)| self.columns.iter().find(|c| c.key() == key));
        let direction = self
            .sort
            .as_ref()
            .map(|(_, d)| *d)
            .unwrap_or(SortDirection::Ascending);
        self.order = sort_order(&self.rows, column, direction, self.sort_nulls);
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_indices().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    fn move_cursor_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    fn move_cursor_down(&mut self, n: usize) {
        let len = self.visible_indices().len();
        if len > 0 {
            self.cursor = (self.cursor + n).min(len - 1);
        }
    }

    fn cycle_sort(&mut self) {
        let Some(column) = self.columns.get(self.col_cursor) else {
            return;
        };
        if !column.is_sortable() {
            return;
        }
        let key = column.key().to_string();
        let current = match self.sort {
            Some((ref k, d)) if *k == key => Some(d),
            _ => None,
        };
        self.sort = advance_direction(current, self.sort_cycle).map(|d| (key, d));
        self.refresh_order();
        self.clamp_cursor();
    }

    fn toggle_cursor_row(&mut self) -> Command<Message<T>> {
        if !self.selectable() {
            return Command::none();
        }
        let Some(index) = self.cursor_row_index() else {
            return Command::none();
        };
        // A row without an identifier cannot be addressed by the
        // selection set; ignore the toggle rather than fail.
        let Some(key) = self.row_key(&self.rows[index]) else {
            return Command::none();
        };
        let selected = !self.selection.is_selected(&key);
        self.selection.toggle(&key, selected);
        Command::message(Message::SelectionChanged(self.selected_rows()))
    }

    fn toggle_all(&mut self) -> Command<Message<T>> {
        if self.selection.mode() != SelectMode::Multiple {
            return Command::none();
        }
        let visible = self.visible_keys();
        if visible.is_empty() {
            return Command::none();
        }
        if self.selection.all_selected(&visible) {
            self.selection.clear();
        } else {
            self.selection.select_all(visible);
        }
        Command::message(Message::SelectionChanged(self.selected_rows()))
    }

    fn activate_cursor_row(&mut self) -> Command<Message<T>> {
        let Some(index) = self.cursor_row_index() else {
            return Command::none();
        };
        let clicked = Command::message(Message::RowClicked(self.rows[index].clone()));
        if !self.selectable() {
            return clicked;
        }
        // Click callback first, then the selection toggle.
        let toggled = self.toggle_cursor_row();
        Command::batch([clicked, toggled])
    }

    fn change_page(&mut self, apply: impl Fn(&mut PageState)) -> Command<Message<T>> {
        let cmd = match self.pagination {
            Pagination::Off => return Command::none(),
            Pagination::Managed(ref mut state) => {
                apply(state);
                Command::none()
            }
            Pagination::Controlled(ref state) => {
                // Controlled state is read-only props: compute the
                // requested transition on a copy and emit it.
                let mut requested = state.clone();
                apply(&mut requested);
                if requested.page == state.page && requested.page_size == state.page_size {
                    return Command::none();
                }
                Command::message(Message::PaginationChanged {
                    page: requested.page,
                    page_size: requested.page_size,
                })
            }
        };
        self.cursor = 0;
        cmd
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message<T>> {
        if self.bindings.up.matches(&key) {
            self.move_cursor_up(1);
            Command::none()
        } else if self.bindings.down.matches(&key) {
            self.move_cursor_down(1);
            Command::none()
        } else if self.bindings.first_row.matches(&key) {
            self.cursor = 0;
            Command::none()
        } else if self.bindings.last_row.matches(&key) {
            let len = self.visible_indices().len();
            self.cursor = len.saturating_sub(1);
            Command::none()
        } else if self.bindings.col_left.matches(&key) {
            self.col_cursor = self.col_cursor.saturating_sub(1);
            Command::none()
        } else if self.bindings.col_right.matches(&key) {
            if !self.columns.is_empty() {
                self.col_cursor = (self.col_cursor + 1).min(self.columns.len() - 1);
            }
            Command::none()
        } else if self.bindings.col_next.matches(&key) {
            if !self.columns.is_empty() {
                self.col_cursor = (self.col_cursor + 1) % self.columns.len();
            }
            Command::none()
        } else if self.bindings.sort.matches(&key) {
            self.cycle_sort();
            Command::none()
        } else if self.bindings.toggle.matches(&key) {
            self.toggle_cursor_row()
        } else if self.bindings.toggle_all.matches(&key) {
            self.toggle_all()
        } else if self.bindings.activate.matches(&key) {
            self.activate_cursor_row()
        } else if self.bindings.next_page.matches(&key) {
            self.change_page(|s| s.next_page())
        } else if self.bindings.prev_page.matches(&key) {
            self.change_page(|s| s.prev_page())
        } else if self.bindings.first_page.matches(&key) {
            self.change_page(|s| s.first_page())
        } else if self.bindings.last_page.matches(&key) {
            self.change_page(|s| s.last_page())
        } else if self.bindings.cycle_page_size.matches(&key) {
            self.change_page(|s| s.cycle_page_size())
        } else {
            Command::none()
        }
    }

    fn header_checkbox(&self) -> &'static str {
        if self.all_selected() {
            "[x]"
        } else if self.some_selected() {
            "[~]"
        } else {
            "[ ]"
        }
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, text: &str) {
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.style.placeholder);
        frame.render_widget(paragraph, area);
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable() {
            widths.push(Constraint::Length(3));
        }
        let share = if self.columns.is_empty() {
            100
        } else {
            100 / self.columns.len() as u16
        };
        for column in &self.columns {
            widths.push(column.width().unwrap_or(Constraint::Percentage(share)));
        }
        widths
    }

    fn header_row(&self) -> Row<'_> {
        let mut cells = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable() {
            cells.push(RatatuiCell::from(self.header_checkbox()).style(self.style.header));
        }
        for (i, column) in self.columns.iter().enumerate() {
            let mut title = column.title().to_string();
            if let Some((key, direction)) = self.sort_state() {
                if key == column.key() {
                    title.push_str(match direction {
                        SortDirection::Ascending => " ↑",
                        SortDirection::Descending => " ↓",
                    });
                }
            }
            let mut style = self.style.header;
            if i == self.col_cursor && self.focus {
                style = style.patch(self.style.active_column);
            }
            cells.push(RatatuiCell::from(title).style(style));
        }
        Row::new(cells).height(1).bottom_margin(1)
    }

    fn render_rows(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .visible_indices()
            .iter()
            .map(|&index| {
                let row = &self.rows[index];
                let is_selected = self
                    .row_key(row)
                    .is_some_and(|k| self.selection.is_selected(&k));

                let mut cells = Vec::with_capacity(self.columns.len() + 1);
                if self.selectable() {
                    cells.push(RatatuiCell::from(if is_selected { "[x]" } else { "[ ]" }));
                }
                for column in &self.columns {
                    cells.push(RatatuiCell::from(column.display(row)));
                }

                let style = if is_selected {
                    self.style.normal.patch(self.style.selected)
                } else {
                    self.style.normal
                };
                Row::new(cells).style(style)
            })
            .collect();

        let widths = self.widths();
        let table = RatatuiTable::new(rows, widths)
            .header(self.header_row())
            .row_highlight_style(self.style.cursor)
            .highlight_symbol(self.style.highlight_symbol.as_str());

        let mut state = TableState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let Some(state) = self.pagination.state() else {
            return;
        };
        let line = Line::from(vec![
            Span::raw(state.summary()),
            Span::raw("  ·  "),
            Span::raw(state.indicator()),
            Span::raw("  ·  "),
            Span::raw(format!("{}/page", state.page_size)),
        ]);
        let paragraph = Paragraph::new(line).style(self.style.footer);
        frame.render_widget(paragraph, area);
    }
}

impl<T: Clone + Send + 'static> Component for DataTable<T> {
    type Message = Message<T>;

    fn update(&mut self, msg: Message<T>) -> Command<Message<T>> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            // Emitted variants are for the parent; nothing to do here.
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus {
            self.style.focused_border
        } else {
            self.style.unfocused_border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if !self.title.is_empty() {
            block = block.title(self.title.as_str());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (body, footer) = if self.pagination.is_enabled() && inner.height > 1 {
            let [body, footer] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
            (body, Some(footer))
        } else {
            (inner, None)
        };

        if self.loading {
            self.render_placeholder(frame, body, &self.loading_text);
        } else if self.visible_indices().is_empty() {
            self.render_placeholder(frame, body, &self.empty_text);
        } else {
            self.render_rows(frame, body);
        }

        if let Some(footer_area) = footer {
            self.render_footer(frame, footer_area);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
