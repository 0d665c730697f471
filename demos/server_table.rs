//! # Controlled Pagination
//!
//! The externally-managed pagination story: the parent model owns the
//! `PageState`, the table only *requests* transitions via
//! `Message::PaginationChanged`, and the parent feeds the applied state
//! back with `set_pagination_state`. This is the wiring you would use
//! when a server owns the page of rows.
//!
//! Run with: `cargo run --example server_table`

use canvas::crossterm::event::{KeyCode, KeyModifiers};
use canvas::ratatui::layout::{Alignment, Constraint, Layout};
use canvas::ratatui::style::{Color, Style};
use canvas::ratatui::text::{Line, Span};
use canvas::ratatui::widgets::{Block, Borders, Paragraph};
use canvas::ratatui::Frame;
use canvas::widgets::column::Column;
use canvas::widgets::data_table::{self, DataTable};
use canvas::widgets::pagination::PageState;
use canvas::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};

#[derive(Debug, Clone, PartialEq)]
struct City {
    id: u32,
    name: String,
    country: String,
    population: i64,
}

fn cities() -> Vec<City> {
    let raw: [(&str, &str, i64); 25] = [
        ("Tokyo", "Japan", 37_400_068),
        ("Delhi", "India", 28_514_000),
        ("Shanghai", "China", 25_582_000),
        ("São Paulo", "Brazil", 21_650_000),
        ("Mexico City", "Mexico", 21_581_000),
        ("Cairo", "Egypt", 20_076_000),
        ("Mumbai", "India", 19_980_000),
        ("Beijing", "China", 19_618_000),
        ("Dhaka", "Bangladesh", 19_578_000),
        ("Osaka", "Japan", 19_281_000),
        ("New York", "United States", 18_819_000),
        ("Karachi", "Pakistan", 15_400_000),
        ("Buenos Aires", "Argentina", 14_967_000),
        ("Chongqing", "China", 14_838_000),
        ("Istanbul", "Turkey", 14_751_000),
        ("Kolkata", "India", 14_681_000),
        ("Manila", "Philippines", 13_482_000),
        ("Lagos", "Nigeria", 13_463_000),
        ("Rio de Janeiro", "Brazil", 13_293_000),
        ("Tianjin", "China", 13_215_000),
        ("Kinshasa", "DR Congo", 13_171_000),
        ("Guangzhou", "China", 12_638_000),
        ("Los Angeles", "United States", 12_458_000),
        ("Moscow", "Russia", 12_410_000),
        ("Shenzhen", "China", 11_908_000),
    ];
    raw.iter()
        .enumerate()
        .map(|(i, &(name, country, population))| City {
            id: i as u32 + 1,
            name: name.into(),
            country: country.into(),
            population,
        })
        .collect()
}

fn city_columns() -> Vec<Column<City>> {
    vec![
        Column::new("name", "City", |c: &City| Some(c.name.clone().into())).sortable(),
        Column::new("country", "Country", |c: &City| {
            Some(c.country.clone().into())
        }),
        Column::new("population", "Population", |c: &City| {
            Some(c.population.into())
        })
        .sortable(),
    ]
}

struct ServerTablePage {
    // The page state lives here, not in the table.
    page_state: PageState,
    table: DataTable<City>,
    requests: usize,
}

#[derive(Debug)]
enum Msg {
    Table(data_table::Message<City>),
    Quit,
}

impl Model for ServerTablePage {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut page_state = PageState::new(10);
        page_state.set_total(cities().len());

        let mut table = DataTable::new(city_columns())
            .with_rows(cities())
            .with_row_id(|c: &City| Some(c.id.to_string()))
            .with_controlled_pagination(page_state.clone())
            .with_title("World Cities");
        table.focus();

        (
            ServerTablePage {
                page_state,
                table,
                requests: 0,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Table(m) => {
                if let data_table::Message::PaginationChanged { page, page_size } = &m {
                    // Apply the requested transition to the state we own,
                    // clamped, and hand it back to the table.
                    self.page_state.set_page_size(*page_size);
                    self.page_state.set_total(cities().len());
                    self.page_state.set_page(*page);
                    self.table.set_pagination_state(self.page_state.clone());
                    self.requests += 1;
                }
                self.table.update(m).map(Msg::Table)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [table_area, status_area, help_area] = Layout::vertical([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(frame.area());

        self.table.view(frame, table_area);

        let status = Paragraph::new(format!(
            "Caller-owned state: page {} · {} per page · {} transitions applied",
            self.page_state.page, self.page_state.page_size, self.requests
        ))
        .block(Block::default().borders(Borders::ALL).title("Controller"));
        frame.render_widget(status, status_area);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("n/p", Style::default().fg(Color::Cyan)),
            Span::raw(" page  "),
            Span::styled("z", Style::default().fg(Color::Cyan)),
            Span::raw(" page size  "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(" sort  "),
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
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                _ => Some(Msg::Table(data_table::Message::KeyPress(key))),
            },
            _ => None,
        })]
    }
}

#[canvas::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    canvas::run::<ServerTablePage>(()).await?;
    Ok(())
}
