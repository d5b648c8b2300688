// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de subscribers.
/// Los clones comparten la misma lista: un store clonado sigue notificando a la app.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista antes de llamar para que un callback pueda suscribir otro.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }
        let clone = notifier.clone();
        clone.notify();
        notifier.notify();
        assert_eq!(hits.get(), 2);
        assert_eq!(clone.subscriber_count(), 1);
    }

    #[test]
    fn callback_may_subscribe_during_notify() {
        let notifier = ChangeNotifier::new();
        {
            let inner = notifier.clone();
            notifier.subscribe(move || inner.subscribe(|| {}));
        }
        notifier.notify();
        assert_eq!(notifier.subscriber_count(), 2);
    }
}
