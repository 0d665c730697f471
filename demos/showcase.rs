//! # Component Showcase
//!
//! The demo page for the canvas widgets:
//! - Two `InputField`s (clearable text and concealed password) composed
//!   with a `DataTable` behind a `FocusGroup`
//! - Multiple-selection table wired to a selected-rows readout
//! - Ctrl+L simulates a slow data source (loading for two seconds via
//!   `Command::tick`); Ctrl+D swaps the data set with an empty one
//!
//! Run with: `cargo run --example showcase`

use canvas::crossterm::event::{KeyCode, KeyModifiers};
use canvas::ratatui::layout::{Alignment, Constraint, Layout};
use canvas::ratatui::style::{Color, Modifier, Style};
use canvas::ratatui::text::{Line, Span};
use canvas::ratatui::widgets::{Block, Borders, Paragraph};
use canvas::ratatui::Frame;
use canvas::widgets::cell::CellValue;
use canvas::widgets::column::Column;
use canvas::widgets::data_table::{self, DataTable};
use canvas::widgets::focus::FocusGroup;
use canvas::widgets::input_field::{self, InputField};
use canvas::widgets::row_selection::SelectMode;
use canvas::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    age: i64,
}

fn sample_users() -> Vec<User> {
    let raw = [
        (1, "John Doe", "john@example.com", 28),
        (2, "Jane Smith", "jane@example.com", 34),
        (3, "Sam Green", "sam@example.com", 42),
        (4, "Alice Brown", "alice@example.com", 23),
        (5, "Bob Johnson", "bob@example.com", 55),
    ];
    raw.iter()
        .map(|&(id, name, email, age)| User {
            id,
            name: name.into(),
            email: email.into(),
            age,
        })
        .collect()
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| Some(u.name.clone().into())).sortable(),
        Column::new("email", "Email", |u: &User| Some(u.email.clone().into())),
        Column::new("age", "Age", |u: &User| Some(CellValue::from(u.age)))
            .sortable()
            .with_render(|value, _| match value {
                Some(v) => format!("{v} yrs"),
                None => String::new(),
            }),
    ]
}

struct ShowcasePage {
    name_input: InputField,
    password_input: InputField,
    table: DataTable<User>,
    selected: Vec<User>,
    last_clicked: Option<User>,
    data_present: bool,
    focus: FocusGroup<3>,
}

#[derive(Debug)]
enum Msg {
    Name(input_field::Message),
    Password(input_field::Message),
    Table(data_table::Message<User>),
    ToggleLoading,
    LoadingDone,
    ToggleData,
    FocusNext,
    FocusPrev,
    Quit,
}

impl ShowcasePage {
    fn sync_focus(&mut self) {
        self.name_input.blur();
        self.password_input.blur();
        self.table.blur();
        match self.focus.focused() {
            0 => self.name_input.focus(),
            1 => self.password_input.focus(),
            _ => self.table.focus(),
        }
    }
}

impl Model for ShowcasePage {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut name_input = InputField::new("Type something...")
            .with_label("With Clear Button")
            .with_helper_text("Ctrl+U clears the input.");
        name_input.set_value("Some text");
        name_input.focus();

        let mut password_input = InputField::new("Enter password")
            .with_label("Password")
            .with_helper_text("Ctrl+R toggles visibility.")
            .concealed()
            .with_animation_id("password-loading");
        password_input.set_value("password123");

        let table = DataTable::new(user_columns())
            .with_rows(sample_users())
            .with_row_id(|u: &User| Some(u.id.to_string()))
            .with_select_mode(SelectMode::Multiple)
            .with_title("Users");

        (
            ShowcasePage {
                name_input,
                password_input,
                table,
                selected: Vec::new(),
                last_clicked: None,
                data_present: true,
                focus: FocusGroup::new(),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Name(m) => self.name_input.update(m).map(Msg::Name),
            Msg::Password(m) => self.password_input.update(m).map(Msg::Password),
            Msg::Table(m) => {
                // Observe the table's emitted messages before delegating.
                match &m {
                    data_table::Message::SelectionChanged(rows) => {
                        self.selected = rows.clone();
                    }
                    data_table::Message::RowClicked(row) => {
                        self.last_clicked = Some(row.clone());
                    }
                    _ => {}
                }
                self.table.update(m).map(Msg::Table)
            }
            Msg::ToggleLoading => {
                if self.table.is_loading() {
                    return Command::none();
                }
                self.table.set_loading(true);
                Command::tick(Duration::from_secs(2), |_| Msg::LoadingDone)
            }
            Msg::LoadingDone => {
                self.table.set_loading(false);
                Command::none()
            }
            Msg::ToggleData => {
                if self.data_present {
                    self.table.set_rows(Vec::new());
                } else {
                    self.table.set_rows(sample_users());
                }
                self.data_present = !self.data_present;
                Command::none()
            }
            Msg::FocusNext | Msg::FocusPrev => {
                if matches!(msg, Msg::FocusNext) {
                    self.focus.focus_next();
                } else {
                    self.focus.focus_prev();
                }
                self.sync_focus();
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, inputs_area, table_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        let title = Paragraph::new("Component Canvas")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        let [name_area, password_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inputs_area);
        self.name_input.view(frame, name_area);
        self.password_input.view(frame, password_area);

        self.table.view(frame, table_area);

        let selected_ids: Vec<String> = self.selected.iter().map(|u| u.id.to_string()).collect();
        let clicked = self
            .last_clicked
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "-".into());
        let status = Paragraph::new(vec![
            Line::from(format!("Selected row IDs: [{}]", selected_ids.join(", "))),
            Line::from(format!("Last clicked: {clicked}")),
        ])
        .block(Block::default().borders(Borders::ALL).title("Callbacks"));
        frame.render_widget(status, status_area);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" focus  "),
            Span::styled("Ctrl+L", Style::default().fg(Color::Cyan)),
            Span::raw(" loading  "),
            Span::styled("Ctrl+D", Style::default().fg(Color::Cyan)),
            Span::raw(" empty/data  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let focused = self.focus.focused();
        let mut subs = vec![terminal_events(move |ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Char('l'), m) if m.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::ToggleLoading)
                }
                (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => {
                    Some(Msg::ToggleData)
                }
                (KeyCode::Tab, KeyModifiers::NONE) => Some(Msg::FocusNext),
                (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                _ => {
                    // Route unhandled keys to the focused widget.
                    match focused {
                        0 => Some(Msg::Name(input_field::Message::KeyPress(key))),
                        1 => Some(Msg::Password(input_field::Message::KeyPress(key))),
                        _ => Some(Msg::Table(data_table::Message::KeyPress(key))),
                    }
                }
            },
            TerminalEvent::Paste(text) => match focused {
                0 => Some(Msg::Name(input_field::Message::Paste(text))),
                1 => Some(Msg::Password(input_field::Message::Paste(text))),
                _ => None,
            },
            _ => None,
        })];

        // Child subscriptions (the input fields animate while loading).
        subs.extend(
            self.name_input
                .subscriptions()
                .into_iter()
                .map(|s| s.map(Msg::Name)),
        );
        subs.extend(
            self.password_input
                .subscriptions()
                .into_iter()
                .map(|s| s.map(Msg::Password)),
        );
        subs
    }
}

#[canvas::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    canvas::run::<ShowcasePage>(()).await?;
    Ok(())
}
