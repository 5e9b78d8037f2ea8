use tracing::trace;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::{Error, Result};

/// A DOM event listener that is removed again when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub(crate) fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(Error::from_js)?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        ) {
            trace!(
                event = self.event_type,
                "failed to remove listener: {}",
                Error::from_js(err)
            );
        }
    }
}
