// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones. Los clones comparten tanto
/// el valor como la lista de subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor actual a través de un closure
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Actualizar el valor y notificar subscribers
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    /// Actualizar SIN notificar. Para mutaciones que no son input de ninguna
    /// query (p.ej. el count que el servidor devuelve con cada resultado).
    pub fn update_silent<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        updater(&mut self.value.borrow_mut())
    }

    /// Actualizar y notificar solo si el closure reporta que hubo cambio
    pub fn update_if(&self, updater: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = updater(&mut self.value.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    /// Suscribirse a cambios
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Clonar la lista antes de invocar: un callback puede volver a
        // suscribir o leer el estado
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Snapshot del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}
