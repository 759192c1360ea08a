// ============================================================================
// DEBOUNCE - Tarea diferida cancelable
// ============================================================================
// Cada `schedule` cancela la tarea pendiente (drop del Timeout) y programa
// una nueva; solo la más reciente llega a ejecutarse.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo_timers::callback::Timeout;

#[derive(Clone, Default)]
pub struct Debouncer {
    // El Timeout se conserva aquí hasta el siguiente schedule/cancel;
    // no se suelta dentro de su propio callback.
    pending: Rc<RefCell<Option<Timeout>>>,
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programar `task` dentro de `delay_ms`, descartando la anterior
    pub fn schedule<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let my_generation = self.generation.get().wrapping_add(1);
        self.generation.set(my_generation);

        let generation = self.generation.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if generation.get() != my_generation {
                return;
            }
            task();
        });

        // Drop del Timeout anterior = clearTimeout
        if self.pending.borrow_mut().replace(timeout).is_some() {
            log::debug!("⏱️ [DEBOUNCE] Tarea anterior descartada");
        }
    }

    /// Cancelar la tarea pendiente, si la hay
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(timeout) = self.pending.borrow_mut().take() {
            timeout.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_without_pending_task() {
        let debouncer = Debouncer::new();
        debouncer.cancel();
        debouncer.cancel();
        assert_eq!(debouncer.generation.get(), 2);
        assert!(debouncer.pending.borrow().is_none());
    }
}
