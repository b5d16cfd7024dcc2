use tracing::warn;

use crate::{display::DisplayHandler, model::WeatherReading};

/// Fan-out hub: holds the registered displays and pushes every new reading
/// to all of them.
///
/// The handler list is owned by the instance, append-only, and delivery
/// order is registration order.
#[derive(Default)]
pub struct WeatherStation {
    handlers: Vec<Box<dyn DisplayHandler>>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Append a display. Duplicates are allowed; there is no removal.
    pub fn register<H: DisplayHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver `reading` to every registered display, in registration order.
    ///
    /// A failing display does not stop delivery to the rest: the failure is
    /// logged and the fan-out continues. Returns the number of successful
    /// deliveries.
    pub fn broadcast(&mut self, reading: &WeatherReading) -> usize {
        let mut delivered = 0;

        for handler in &mut self.handlers {
            match handler.render(reading) {
                Ok(()) => delivered += 1,
                Err(err) => warn!("display '{}' failed to render: {err}", handler.name()),
            }
        }

        delivered
    }
}
