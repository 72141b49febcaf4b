// ============================================================================
// SESSION STATE - Ciclo de vida de la sesión autenticada
// ============================================================================
// Único dueño de la credencial. El Query Client comparte la celda del token
// por Rc: todas las mutaciones pasan por aquí y se espejan en storage de
// forma síncrona (sin lecturas rotas entre login/logout y un request).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::Identity;
use crate::utils::storage::{SharedKeyStore, STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME};

/// Estado del ciclo de vida de la sesión. `Initializing` existe solo hasta
/// que se chequea la credencial persistida; nunca se vuelve a entrar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Initializing,
    Authenticated,
    Anonymous,
}

#[derive(Clone)]
pub struct SessionState {
    status: Rc<Cell<SessionStatus>>,
    credential: Rc<RefCell<Option<String>>>,
    identity: Rc<RefCell<Option<Identity>>>,
    store: SharedKeyStore,
}

impl SessionState {
    pub fn new(store: SharedKeyStore) -> Self {
        Self {
            status: Rc::new(Cell::new(SessionStatus::Initializing)),
            credential: Rc::new(RefCell::new(None)),
            identity: Rc::new(RefCell::new(None)),
            store,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.get() == SessionStatus::Authenticated
    }

    /// Celda de credencial compartida con el Query Client
    pub fn credential_cell(&self) -> Rc<RefCell<Option<String>>> {
        self.credential.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// Restaurar la sesión persistida al arrancar. Sale de `Initializing`
    /// exactamente una vez: a `Authenticated` si token + username están
    /// ambos presentes, a `Anonymous` en cualquier otro caso.
    pub fn restore(&self) {
        let token = self.store.get(STORAGE_KEY_TOKEN);
        let username = self.store.get(STORAGE_KEY_USERNAME);

        match (token, username) {
            (Some(token), Some(username)) => {
                *self.credential.borrow_mut() = Some(token);
                *self.identity.borrow_mut() = Some(Identity {
                    display_name: username,
                });
                self.status.set(SessionStatus::Authenticated);
                log::info!("🔑 Sesión restaurada desde storage");
            }
            _ => {
                self.status.set(SessionStatus::Anonymous);
                log::info!("👤 Sin sesión persistida, arrancando anónimo");
            }
        }
    }

    /// Aplicar un login exitoso: estado y storage en un solo paso síncrono
    pub fn apply_login(&self, token: &str, username: &str) {
        self.store.set(STORAGE_KEY_TOKEN, token);
        self.store.set(STORAGE_KEY_USERNAME, username);
        *self.credential.borrow_mut() = Some(token.to_string());
        *self.identity.borrow_mut() = Some(Identity {
            display_name: username.to_string(),
        });
        self.status.set(SessionStatus::Authenticated);
    }

    /// Cerrar sesión: limpia credencial, identidad y storage. Idempotente y
    /// siempre exitoso localmente (no toca la red).
    pub fn logout(&self) {
        self.store.remove(STORAGE_KEY_TOKEN);
        self.store.remove(STORAGE_KEY_USERNAME);
        *self.credential.borrow_mut() = None;
        *self.identity.borrow_mut() = None;
        self.status.set(SessionStatus::Anonymous);
        log::info!("👋 Sesión cerrada");
    }

    /// Intercambio de credenciales contra el backend. Nunca lanza: cualquier
    /// fallo (red o credenciales rechazadas) deja el estado intacto y
    /// devuelve false; la vista decide cómo informarlo.
    #[cfg(target_arch = "wasm32")]
    pub async fn login(
        &self,
        client: &crate::services::QueryClient,
        username: &str,
        password: &str,
    ) -> bool {
        match client.login(username, password).await {
            Ok(response) => {
                self.apply_login(&response.access, username);
                log::info!("✅ Login exitoso para {}", username);
                true
            }
            Err(e) => {
                log::warn!("❌ Falla en login: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn restore_without_persisted_credential_goes_anonymous() {
        let session = SessionState::new(Rc::new(MemoryStore::new()));
        assert_eq!(session.status(), SessionStatus::Initializing);

        session.restore();
        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(session.identity().is_none());
        assert!(session.credential_cell().borrow().is_none());
    }

    #[test]
    fn restore_with_both_entries_goes_authenticated() {
        let store = MemoryStore::with(&[
            (STORAGE_KEY_TOKEN, "tok-123"),
            (STORAGE_KEY_USERNAME, "maria"),
        ]);
        let session = SessionState::new(Rc::new(store));

        session.restore();
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.identity().unwrap().display_name, "maria");
        assert_eq!(session.credential_cell().borrow().as_deref(), Some("tok-123"));
    }

    #[test]
    fn restore_with_only_token_goes_anonymous() {
        // Ambas entradas son necesarias para cortocircuitar a autenticado
        let store = MemoryStore::with(&[(STORAGE_KEY_TOKEN, "tok-123")]);
        let session = SessionState::new(Rc::new(store));

        session.restore();
        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(session.identity().is_none());
    }

    #[test]
    fn login_sets_state_and_mirrors_storage() {
        let store = Rc::new(MemoryStore::new());
        let session = SessionState::new(store.clone());
        session.restore();

        session.apply_login("tok-999", "joao");
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.credential_cell().borrow().as_deref(), Some("tok-999"));
        assert_eq!(session.identity().unwrap().display_name, "joao");

        use crate::utils::storage::KeyStore;
        assert_eq!(store.get(STORAGE_KEY_TOKEN).as_deref(), Some("tok-999"));
        assert_eq!(store.get(STORAGE_KEY_USERNAME).as_deref(), Some("joao"));
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let store = Rc::new(MemoryStore::new());
        let session = SessionState::new(store.clone());
        session.restore();
        session.apply_login("tok-1", "ana");

        session.logout();
        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert!(session.identity().is_none());
        assert!(session.credential_cell().borrow().is_none());

        use crate::utils::storage::KeyStore;
        assert!(store.get(STORAGE_KEY_TOKEN).is_none());
        assert!(store.get(STORAGE_KEY_USERNAME).is_none());

        // Repetir el logout no cambia nada ni falla
        session.logout();
        assert_eq!(session.status(), SessionStatus::Anonymous);
    }

    #[test]
    fn identity_present_iff_credential_present() {
        let session = SessionState::new(Rc::new(MemoryStore::new()));
        session.restore();

        assert_eq!(
            session.identity().is_some(),
            session.credential_cell().borrow().is_some()
        );

        session.apply_login("t", "u");
        assert_eq!(
            session.identity().is_some(),
            session.credential_cell().borrow().is_some()
        );

        session.logout();
        assert_eq!(
            session.identity().is_some(),
            session.credential_cell().borrow().is_some()
        );
    }
}
