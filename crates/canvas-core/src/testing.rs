use crate::command::{Action, Command, CommandInner};
use crate::component::Component;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real
/// terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain
/// `#[test]` function — no tokio runtime or TTY required. Synchronous
/// commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); async and quit
/// commands are ignored.
///
/// # Example
///
/// ```rust,ignore
/// let mut prog = TestProgram::<ShowcasePage>::new(());
/// prog.send(Msg::ToggleData);
/// assert!(prog.model().rows.is_empty());
/// assert!(prog.render_string(60, 10).contains("No results found."));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given
    /// flags. Synchronous commands produced by `init` are queued.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending: Vec::new(),
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Synchronous commands returned by `update` are queued; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process queued synchronous messages until none are produced.
    ///
    /// Useful for message-chaining scenarios where one update emits a
    /// message that triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            let messages: Vec<_> = self.pending.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for direct test setup, bypassing the
    /// message-driven update cycle.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// rows separated by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        buffer_to_string(&buf, Rect::new(0, 0, width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending.push(msg),
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't run synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

/// Render a single [`Component`] into a test backend and return the
/// visible content as a plain string.
///
/// The widget counterpart of
/// [`TestProgram::render_string`] — handy for asserting on a widget's
/// output without wrapping it in a model.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> String {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            component.view(frame, frame.area());
        })
        .unwrap();
    let buf = terminal.backend().buffer().clone();
    buffer_to_string(&buf, Rect::new(0, 0, width, height))
}

fn buffer_to_string(buf: &Buffer, area: Rect) -> String {
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A minimal model accumulating lines of text.
    struct Journal {
        lines: Vec<String>,
    }

    #[derive(Debug)]
    enum JournalMsg {
        Append(String),
        Clear,
        Announce,
    }

    impl Model for Journal {
        type Message = JournalMsg;
        type Flags = Vec<String>;

        fn init(lines: Vec<String>) -> (Self, Command<JournalMsg>) {
            (Journal { lines }, Command::none())
        }

        fn update(&mut self, msg: JournalMsg) -> Command<JournalMsg> {
            match msg {
                JournalMsg::Append(line) => {
                    self.lines.push(line);
                    Command::none()
                }
                JournalMsg::Clear => {
                    self.lines.clear();
                    Command::none()
                }
                // Emits a follow-up message, exercising the pending queue.
                JournalMsg::Announce => Command::message(JournalMsg::Append("announced".into())),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = self.lines.join(" | ");
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn init_with_flags() {
        let prog = TestProgram::<Journal>::new(vec!["first".into()]);
        assert_eq!(prog.model().lines, vec!["first"]);
    }

    #[test]
    fn send_updates_state() {
        let mut prog = TestProgram::<Journal>::new(vec![]);
        prog.send(JournalMsg::Append("a".into()));
        prog.send(JournalMsg::Append("b".into()));
        assert_eq!(prog.model().lines, vec!["a", "b"]);
        prog.send(JournalMsg::Clear);
        assert!(prog.model().lines.is_empty());
    }

    #[test]
    fn drain_processes_chained_messages() {
        let mut prog = TestProgram::<Journal>::new(vec![]);
        prog.send(JournalMsg::Announce);
        assert!(prog.model().lines.is_empty());
        prog.drain_messages();
        assert_eq!(prog.model().lines, vec!["announced"]);
    }

    #[test]
    fn render_string_shows_view() {
        let mut prog = TestProgram::<Journal>::new(vec![]);
        prog.send(JournalMsg::Append("hello".into()));
        let content = prog.render_string(20, 1);
        assert!(content.contains("hello"));
    }

    #[test]
    fn render_component_draws_into_area() {
        struct Label;
        impl Component for Label {
            type Message = ();
            fn update(&mut self, _: ()) -> Command<()> {
                Command::none()
            }
            fn view(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
                frame.render_widget(Paragraph::new("widget"), area);
            }
        }
        let content = render_component(&Label, 10, 1);
        assert!(content.contains("widget"));
    }
}
