use crossterm::event::KeyEvent;

/// Terminal events delivered by the runtime's event loop.
///
/// Events reach your application through the
/// [`terminal_events`](crate::subscriptions::terminal_events)
/// subscription: you provide a mapping function that turns each
/// `TerminalEvent` into your application's `Message` type (or drops it).
///
/// Only the event kinds this library consumes are represented. Key events
/// wrap [`crossterm::event::KeyEvent`], so key codes and modifiers can be
/// pattern-matched with the full crossterm API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding kinds the runtime does not
    /// deliver (mouse and focus reporting are never enabled).
    pub(crate) fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            _ => None,
        }
    }
}
