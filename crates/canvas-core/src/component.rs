use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) method receives an `area: Rect`, so a parent
/// decides *where* each child renders by handing it a sub-region of the
/// frame. Every widget in `canvas-widgets` implements this trait.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and
/// lift child commands with [`Command::map`]:
///
/// ```rust,ignore
/// enum Msg {
///     Table(data_table::Message<User>),
/// }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Table(m) => self.table.update(m).map(Msg::Table),
///     }
/// }
/// ```
///
/// Messages a widget *emits* (selection changed, pagination requested,
/// ...) come back through the same channel: the widget returns them via
/// [`Command::message`], the runtime feeds them into the parent's
/// `update`, and the parent pattern-matches the wrapped variant. This is
/// the callback surface of the widgets.
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent calls [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects child subscriptions and includes them, mapped,
    /// in its own [`Model::subscriptions`](crate::Model::subscriptions)
    /// return value. Defaults to none.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing: parents query `focused()` to decide which
    /// child receives keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
