//! Single-line input field with a label, helper/error text, validation,
//! password concealment, and a loading state.
//!
//! The field owns its text buffer and cursor; the only other state it
//! keeps is transient presentation state (the reveal toggle and the
//! loading animation frame). Everything else — label, helper text,
//! caller-side error message, invalid/loading/disabled flags — is
//! supplied by the caller.

use canvas_core::command::Command;
use canvas_core::component::Component;
use canvas_core::subscription::{subscribe, Subscription};
use canvas_core::subscriptions::Every;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

const LOADING_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Messages for the input field.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text at the cursor position.
    Paste(String),
    /// Advance the loading animation.
    AnimationTick,
    /// Emitted when the value changes, carrying the new value.
    Changed(String),
    /// Emitted when Enter is pressed, carrying the current value.
    Submitted(String),
    /// Emitted when the value is cleared (Ctrl+U).
    Cleared,
}

/// Style configuration for the input field.
#[derive(Debug, Clone)]
pub struct InputFieldStyle {
    /// Style applied to the label line.
    pub label: Style,
    /// Style applied to the input text.
    pub text: Style,
    /// Style applied to the placeholder text.
    pub placeholder: Style,
    /// Style applied to the cursor character.
    pub cursor: Style,
    /// Style applied to the helper line.
    pub helper: Style,
    /// Style applied to the error line and to the text while invalid.
    pub error: Style,
    /// Style applied to the loading spinner frame.
    pub loading: Style,
}

impl Default for InputFieldStyle {
    fn default() -> Self {
        Self {
            label: Style::default().add_modifier(Modifier::BOLD),
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            helper: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            loading: Style::default().fg(Color::Cyan),
        }
    }
}

/// A single-line input field.
///
/// # Example
///
/// ```ignore
/// let mut password = InputField::new("Enter password")
///     .with_label("Password")
///     .with_helper_text("Ctrl+R toggles visibility.")
///     .concealed();
/// password.focus();
/// ```
pub struct InputField {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    placeholder: String,
    label: String,
    helper_text: String,
    error_message: Option<String>,
    invalid: bool,
    err: Option<String>,
    #[allow(clippy::type_complexity)]
    validate: Option<Box<dyn Fn(&str) -> Result<(), String> + Send>>,
    conceal: bool,
    revealed: bool,
    mask: char,
    disabled: bool,
    loading: bool,
    frame_index: usize,
    animation_id: &'static str,
    style: InputFieldStyle,
}

impl InputField {
    /// Create a new input field with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: false,
            placeholder: placeholder.into(),
            label: String::new(),
            helper_text: String::new(),
            error_message: None,
            invalid: false,
            err: None,
            validate: None,
            conceal: false,
            revealed: false,
            mask: '•',
            disabled: false,
            loading: false,
            frame_index: 0,
            animation_id: "input-field",
            style: InputFieldStyle::default(),
        }
    }

    /// Set the label rendered above the input line.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the helper text rendered below the input line.
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = text.into();
        self
    }

    /// Set a caller-side error message. It forces the invalid
    /// presentation and replaces the helper line.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Mark the field invalid without an error message.
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Conceal the value behind mask characters (password entry).
    /// Ctrl+R temporarily reveals it; blurring conceals again.
    pub fn concealed(mut self) -> Self {
        self.conceal = true;
        self
    }

    /// Override the mask character used while concealed.
    pub fn with_mask_char(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Disable the field. Disabled fields ignore all input.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set a validation function run after every change.
    pub fn with_validate(
        mut self,
        f: impl Fn(&str) -> Result<(), String> + Send + 'static,
    ) -> Self {
        self.validate = Some(Box::new(f));
        self
    }

    /// Set the identifier for the loading-animation timer. Give each
    /// field its own id when several can load at once.
    pub fn with_animation_id(mut self, id: &'static str) -> Self {
        self.animation_id = id;
        self
    }

    /// Set custom styles for the field.
    pub fn with_style(mut self, style: InputFieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Give this field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus. A revealed concealed value is hidden again.
    pub fn blur(&mut self) {
        self.focus = false;
        self.revealed = false;
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Set the value programmatically, moving the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
        self.run_validate();
    }

    /// Clear the value and reset the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Set the caller-supplied loading flag. While set the field ignores
    /// edits and renders a spinner.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the loading flag is set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set the caller-side error message.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// The current validation error, if any.
    pub fn err(&self) -> Option<&str> {
        self.err.as_deref()
    }

    /// Whether the field currently presents as invalid.
    pub fn is_invalid(&self) -> bool {
        self.invalid || self.error_message.is_some() || self.err.is_some()
    }

    /// Whether a concealed value is temporarily revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// The current cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn insert_char(&mut self, c: char) -> Command<Message> {
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        Command::message(Message::Changed(self.value()))
    }

    fn delete_char_backward(&mut self) -> Command<Message> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
            return Command::message(Message::Changed(self.value()));
        }
        Command::none()
    }

    fn delete_char_forward(&mut self) -> Command<Message> {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            return Command::message(Message::Changed(self.value()));
        }
        Command::none()
    }

    fn clear_value(&mut self) -> Command<Message> {
        if self.value.is_empty() {
            return Command::none();
        }
        self.value.clear();
        self.cursor = 0;
        Command::message(Message::Cleared)
    }

    fn insert_paste(&mut self, text: &str) -> Command<Message> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Command::none();
        }
        for (i, &c) in chars.iter().enumerate() {
            self.value.insert(self.cursor + i, c);
        }
        self.cursor += chars.len();
        Command::message(Message::Changed(self.value()))
    }

    fn run_validate(&mut self) {
        if let Some(ref validate) = self.validate {
            let val = self.value();
            self.err = validate(&val).err();
        }
    }

    fn display_value(&self) -> String {
        if self.conceal && !self.revealed {
            self.mask.to_string().repeat(self.value.len())
        } else {
            self.value.iter().collect()
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let cmd = match (key.code, key.modifiers) {
            (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => {
                if self.conceal {
                    self.revealed = !self.revealed;
                }
                Command::none()
            }
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => self.clear_value(),
            (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            (KeyCode::Backspace, KeyModifiers::NONE) => self.delete_char_backward(),
            (KeyCode::Delete, KeyModifiers::NONE) => self.delete_char_forward(),
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                Command::none()
            }
            (KeyCode::Enter, _) => Command::message(Message::Submitted(self.value())),
            _ => Command::none(),
        };
        self.run_validate();
        cmd
    }
}

impl Component for InputField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focus || self.disabled || self.loading {
                    return Command::none();
                }
                self.handle_key(key)
            }
            Message::Paste(text) => {
                if !self.focus || self.disabled || self.loading {
                    return Command::none();
                }
                let cmd = self.insert_paste(&text);
                self.run_validate();
                cmd
            }
            Message::AnimationTick => {
                if self.loading {
                    self.frame_index = (self.frame_index + 1) % LOADING_FRAMES.len();
                }
                Command::none()
            }
            Message::Changed(_) | Message::Submitted(_) | Message::Cleared => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::with_capacity(3);

        if !self.label.is_empty() {
            lines.push(Line::from(Span::styled(&self.label, self.style.label)));
        }

        let text_style = if self.is_invalid() {
            self.style.text.patch(self.style.error)
        } else {
            self.style.text
        };

        let mut spans: Vec<Span> = Vec::new();
        if self.loading {
            spans.push(Span::styled(
                LOADING_FRAMES[self.frame_index],
                self.style.loading,
            ));
            spans.push(Span::raw(" "));
        }

        let display = self.display_value();
        let editable = self.focus && !self.disabled && !self.loading;
        if display.is_empty() && !editable {
            spans.push(Span::styled(&self.placeholder, self.style.placeholder));
        } else if !editable {
            spans.push(Span::styled(display, text_style));
        } else {
            // Horizontal scroll: keep the cursor inside the visible width.
            let available = (area.width as usize).max(1);
            let offset = if self.cursor >= available {
                self.cursor + 1 - available
            } else {
                0
            };
            let chars: Vec<char> = display.chars().collect();
            let visible_end = (offset + available).min(chars.len());
            let cursor_in_visible = self.cursor - offset;

            let before: String = chars[offset..self.cursor.min(visible_end)].iter().collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, text_style));
            }
            match chars.get(self.cursor) {
                Some(c) if cursor_in_visible < available => {
                    spans.push(Span::styled(c.to_string(), self.style.cursor));
                    let after: String = chars[self.cursor + 1..visible_end].iter().collect();
                    if !after.is_empty() {
                        spans.push(Span::styled(after, text_style));
                    }
                }
                _ => spans.push(Span::styled(" ", self.style.cursor)),
            }
        }
        lines.push(Line::from(spans));

        let status = self.err.as_deref().or(self.error_message.as_deref());
        if let Some(error) = status {
            lines.push(Line::from(Span::styled(error, self.style.error)));
        } else if !self.helper_text.is_empty() {
            lines.push(Line::from(Span::styled(
                &self.helper_text,
                self.style.helper,
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.loading {
            vec![
                subscribe(Every::new(Duration::from_millis(100), self.animation_id))
                    .map(|_: std::time::Instant| Message::AnimationTick),
            ]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::testing::render_component;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_ctrl(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    fn focused(placeholder: &str) -> InputField {
        let mut input = InputField::new(placeholder);
        input.focus();
        input
    }

    #[test]
    fn new_field_is_empty() {
        let input = InputField::new("placeholder");
        assert!(input.is_empty());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = focused("");
        input.update(key(KeyCode::Char('h')));
        input.update(key(KeyCode::Char('i')));
        assert_eq!(input.value(), "hi");

        input.update(key(KeyCode::Left));
        input.update(key(KeyCode::Char('e')));
        assert_eq!(input.value(), "hei");
    }

    #[test]
    fn typing_emits_changed_with_new_value() {
        let mut input = focused("");
        let cmd = input.update(key(KeyCode::Char('x')));
        match cmd.into_message() {
            Some(Message::Changed(v)) => assert_eq!(v, "x"),
            other => panic!("expected Changed, got {other:?}"),
        }
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = focused("");
        input.set_value("abc");
        input.update(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
        input.update(key(KeyCode::Home));
        input.update(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn home_end_and_ctrl_shortcuts() {
        let mut input = focused("");
        input.set_value("hello");
        input.update(key(KeyCode::Home));
        assert_eq!(input.cursor_position(), 0);
        input.update(key(KeyCode::End));
        assert_eq!(input.cursor_position(), 5);
        input.update(key_ctrl(KeyCode::Char('a')));
        assert_eq!(input.cursor_position(), 0);
        input.update(key_ctrl(KeyCode::Char('e')));
        assert_eq!(input.cursor_position(), 5);
    }

    #[test]
    fn ctrl_u_clears_and_emits_cleared() {
        let mut input = focused("");
        input.set_value("hello");
        let cmd = input.update(key_ctrl(KeyCode::Char('u')));
        assert!(matches!(cmd.into_message(), Some(Message::Cleared)));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn ctrl_u_on_empty_value_is_noop() {
        let mut input = focused("");
        let cmd = input.update(key_ctrl(KeyCode::Char('u')));
        assert!(cmd.is_none());
    }

    #[test]
    fn enter_emits_submitted() {
        let mut input = focused("");
        input.set_value("hello");
        let cmd = input.update(key(KeyCode::Enter));
        match cmd.into_message() {
            Some(Message::Submitted(v)) => assert_eq!(v, "hello"),
            other => panic!("expected Submitted, got {other:?}"),
        }
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn paste_inserts_at_cursor() {
        let mut input = focused("");
        input.set_value("hd");
        input.update(key(KeyCode::Home));
        input.update(key(KeyCode::Right));
        input.update(Message::Paste("ello worl".into()));
        assert_eq!(input.value(), "hello world");
        assert_eq!(input.cursor_position(), 10);
    }

    #[test]
    fn unfocused_field_ignores_input() {
        let mut input = InputField::new("");
        input.update(key(KeyCode::Char('a')));
        input.update(Message::Paste("hello".into()));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn disabled_field_ignores_input() {
        let mut input = focused("").with_disabled(true);
        input.update(key(KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn loading_field_ignores_edits() {
        let mut input = focused("");
        input.set_loading(true);
        input.update(key(KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }

    // ── Concealment ──

    #[test]
    fn concealed_value_displays_masked() {
        let mut input = focused("").concealed();
        input.set_value("sec");
        assert_eq!(input.value(), "sec");
        assert_eq!(input.display_value(), "•••");
    }

    #[test]
    fn ctrl_r_toggles_reveal() {
        let mut input = focused("").concealed();
        input.set_value("sec");
        input.update(key_ctrl(KeyCode::Char('r')));
        assert!(input.is_revealed());
        assert_eq!(input.display_value(), "sec");
        input.update(key_ctrl(KeyCode::Char('r')));
        assert!(!input.is_revealed());
    }

    #[test]
    fn blur_conceals_again() {
        let mut input = focused("").concealed();
        input.set_value("sec");
        input.update(key_ctrl(KeyCode::Char('r')));
        assert!(input.is_revealed());
        input.blur();
        assert!(!input.is_revealed());
        assert_eq!(input.display_value(), "•••");
    }

    #[test]
    fn reveal_toggle_does_nothing_without_conceal() {
        let mut input = focused("");
        input.set_value("plain");
        input.update(key_ctrl(KeyCode::Char('r')));
        assert!(!input.is_revealed());
        assert_eq!(input.display_value(), "plain");
    }

    #[test]
    fn custom_mask_char() {
        let mut input = focused("").concealed().with_mask_char('*');
        input.set_value("abc");
        assert_eq!(input.display_value(), "***");
    }

    // ── Validation and invalid presentation ──

    #[test]
    fn validation_sets_and_clears_error() {
        let mut input = focused("").with_validate(|v| {
            if v.len() < 3 {
                Err("too short".into())
            } else {
                Ok(())
            }
        });
        input.update(key(KeyCode::Char('a')));
        assert_eq!(input.err(), Some("too short"));
        assert!(input.is_invalid());

        input.update(key(KeyCode::Char('b')));
        input.update(key(KeyCode::Char('c')));
        assert!(input.err().is_none());
        assert!(!input.is_invalid());
    }

    #[test]
    fn caller_error_message_forces_invalid() {
        let input = InputField::new("").with_error_message("This field is required.");
        assert!(input.is_invalid());
    }

    #[test]
    fn invalid_flag_without_message() {
        let input = InputField::new("").with_invalid(true);
        assert!(input.is_invalid());
    }

    // ── Rendering ──

    #[test]
    fn renders_label_value_and_helper() {
        let mut input = InputField::new("")
            .with_label("Username")
            .with_helper_text("Pick something memorable.");
        input.set_value("john");
        let out = render_component(&input, 40, 3);
        assert!(out.contains("Username"));
        assert!(out.contains("john"));
        assert!(out.contains("Pick something memorable."));
    }

    #[test]
    fn renders_placeholder_when_empty_and_unfocused() {
        let input = InputField::new("Type here...").with_label("Note");
        let out = render_component(&input, 40, 3);
        assert!(out.contains("Type here..."));
    }

    #[test]
    fn error_line_replaces_helper() {
        let input = InputField::new("")
            .with_label("Email")
            .with_helper_text("We never share it.")
            .with_error_message("This field is required.");
        let out = render_component(&input, 40, 3);
        assert!(out.contains("This field is required."));
        assert!(!out.contains("We never share it."));
    }

    #[test]
    fn renders_masked_value() {
        let mut input = InputField::new("").with_label("Password").concealed();
        input.set_value("secret");
        let out = render_component(&input, 40, 3);
        assert!(out.contains("••••••"));
        assert!(!out.contains("secret"));
    }

    #[test]
    fn loading_field_declares_animation_subscription() {
        let mut input = InputField::new("");
        assert!(input.subscriptions().is_empty());
        input.set_loading(true);
        assert_eq!(input.subscriptions().len(), 1);
    }

    #[test]
    fn animation_tick_advances_only_while_loading() {
        let mut input = InputField::new("");
        input.update(Message::AnimationTick);
        assert_eq!(input.frame_index, 0);
        input.set_loading(true);
        input.update(Message::AnimationTick);
        assert_eq!(input.frame_index, 1);
    }
}
