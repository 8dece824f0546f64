use std::sync::Mutex;

use crate::EventEmitter;

use super::{Notifier, NotifyError};

/// A notifier that emits events via an EventEmitter for in-process
/// subscribers. Requires the `emitter` feature to be enabled.
pub struct EmitterNotifier {
    emitter: Mutex<EventEmitter>,
}

impl EmitterNotifier {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterNotifier {
            emitter: Mutex::new(emitter),
        }
    }
}

impl Notifier for EmitterNotifier {
    fn notify(&self, event: &str, payload: &str) -> Result<(), NotifyError> {
        let mut emitter = self.emitter.lock().map_err(|_| NotifyError::BufferPoisoned)?;
        emitter.emit(event, payload.to_string());
        Ok(())
    }
}
