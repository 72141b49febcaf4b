// ============================================================================
// DIALOGS - Colaborador externo para confirmaciones y avisos al usuario
// ============================================================================
// El core nunca formatea UI: llama a este seam de forma síncrona y la
// implementación decide cómo mostrarlo (window.confirm / window.alert).
// ============================================================================

use std::rc::Rc;

pub trait Dialogs {
    /// Pedir confirmación al usuario; false si no se puede preguntar
    fn confirm(&self, message: &str) -> bool;
    /// Mostrar un aviso no bloqueante para el flujo
    fn notify(&self, message: &str);
}

pub type SharedDialogs = Rc<dyn Dialogs>;

/// Implementación sobre los diálogos nativos del navegador
#[cfg(target_arch = "wasm32")]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(win) => win.confirm_with_message(message).unwrap_or(false),
            None => false,
        }
    }

    fn notify(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}

/// Stub para tests: registra los avisos y responde confirmaciones fijas
#[cfg(test)]
pub struct StubDialogs {
    pub answer: bool,
    pub notices: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl StubDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            notices: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Dialogs for StubDialogs {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
