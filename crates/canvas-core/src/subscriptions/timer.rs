use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` field lets multiple
/// `Every` subscriptions coexist with distinct identities — widgets that
/// animate (e.g. a loading indicator) use their own id so parents can
/// compose several of them.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use canvas_core::subscriptions::Every;
/// use canvas_core::subscription::subscribe;
///
/// let sub = subscribe(Every::new(Duration::from_millis(100), "loading"))
///     .map(|_| Msg::AnimationTick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// A string identifier distinguishing this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let stream =
            tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(self.interval))
                .map(|tick| tick.into_std());
        Box::pin(stream)
    }
}
