// ============================================================================
// SESSION STORE - Estado de autenticación en memoria (por carga de página)
// ============================================================================
// Se crea una vez por instancia de App y se inyecta en vistas y viewmodels.
// Solo muta mediante `set_user` / `set_auth_status` y la comprobación inicial.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::User;
use crate::services::AuthApi;
use crate::state::reactivity::ChangeNotifier;

/// Foto inmutable de la sesión
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Session {
    /// `is_authenticated` sin usuario no debe darse una vez terminada la carga
    pub fn is_consistent(&self) -> bool {
        self.is_loading || !self.is_authenticated || self.user.is_some()
    }
}

/// Progreso de la comprobación inicial `GET /auth/check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckPhase {
    NotStarted,
    InFlight,
    Settled,
}

/// Store de sesión (clone = handle compartido)
#[derive(Clone)]
pub struct SessionStore {
    is_authenticated: Rc<Cell<bool>>,
    user: Rc<RefCell<Option<User>>>,
    is_loading: Rc<Cell<bool>>,
    check_phase: Rc<Cell<CheckPhase>>,
    attached: Rc<Cell<bool>>,
    // Un setter corrió mientras /auth/check estaba en vuelo
    set_during_check: Rc<Cell<bool>>,
    notifier: ChangeNotifier,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            is_authenticated: Rc::new(Cell::new(false)),
            user: Rc::new(RefCell::new(None)),
            is_loading: Rc::new(Cell::new(true)),
            check_phase: Rc::new(Cell::new(CheckPhase::NotStarted)),
            attached: Rc::new(Cell::new(true)),
            set_during_check: Rc::new(Cell::new(false)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            is_authenticated: self.is_authenticated(),
            user: self.user(),
            is_loading: self.is_loading(),
        }
    }

    /// Setter directo, sin validación (login/logout)
    pub fn set_user(&self, user: Option<User>) {
        if !self.attached.get() {
            log::warn!("⚠️ [SESSION] set_user ignorado: store desmontado");
            return;
        }
        self.mark_set_during_check();
        *self.user.borrow_mut() = user;
        self.notifier.notify();
    }

    /// Setter directo, sin validación (login/logout)
    pub fn set_auth_status(&self, authenticated: bool) {
        if !self.attached.get() {
            log::warn!("⚠️ [SESSION] set_auth_status ignorado: store desmontado");
            return;
        }
        self.mark_set_during_check();
        self.is_authenticated.set(authenticated);
        self.notifier.notify();
    }

    /// Comprobación inicial de sesión. Solo la primera llamada llega al servidor;
    /// las siguientes devuelven la foto actual.
    /// Cualquier fallo equivale a "no autenticado" (sin reintentos).
    pub async fn check_auth_status<A: AuthApi + ?Sized>(&self, api: &A) -> Session {
        if self.check_phase.get() != CheckPhase::NotStarted {
            log::debug!("🔁 [SESSION] Comprobación ya realizada, se ignora");
            return self.snapshot();
        }
        self.check_phase.set(CheckPhase::InFlight);
        self.set_during_check.set(false);
        log::info!("🔍 [SESSION] Comprobando sesión en el servidor...");

        let result = api.check().await;

        if !self.attached.get() {
            log::warn!("⚠️ [SESSION] Resultado de /auth/check descartado: store desmontado");
            self.check_phase.set(CheckPhase::Settled);
            return self.snapshot();
        }

        if self.set_during_check.get() {
            // Login/logout ya fijó la sesión: la respuesta de /auth/check es anterior
            log::info!("🔁 [SESSION] Resultado de /auth/check ignorado: la sesión cambió mientras tanto");
            self.is_loading.set(false);
            self.check_phase.set(CheckPhase::Settled);
            self.notifier.notify();
            return self.snapshot();
        }

        match result {
            Ok(Some(user)) => {
                log::info!("✅ [SESSION] Sesión válida para: {}", user.nick_name);
                self.is_authenticated.set(true);
                *self.user.borrow_mut() = Some(user);
            }
            Ok(None) => {
                log::info!("👤 [SESSION] Sin sesión activa");
                self.is_authenticated.set(false);
                *self.user.borrow_mut() = None;
            }
            Err(e) if e.is_unauthorized() => {
                log::info!("👤 [SESSION] Sesión rechazada por el servidor ({})", e);
                self.is_authenticated.set(false);
                *self.user.borrow_mut() = None;
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Comprobación fallida, se trata como no autenticado: {}", e);
                self.is_authenticated.set(false);
                *self.user.borrow_mut() = None;
            }
        }
        self.is_loading.set(false);
        self.check_phase.set(CheckPhase::Settled);
        self.notifier.notify();
        self.snapshot()
    }

    /// Marca el store como desmontado: las respuestas tardías ya no se aplican
    pub fn teardown(&self) {
        self.attached.set(false);
    }

    /// Vuelve a aceptar cambios (página restaurada desde la bfcache)
    pub fn reattach(&self) {
        self.attached.set(true);
    }

    fn mark_set_during_check(&self) {
        if self.check_phase.get() == CheckPhase::InFlight {
            self.set_during_check.set(true);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{http_error, user, FakeAuthApi};
    use futures::executor::block_on;
    use std::cell::Cell;

    fn alice() -> User {
        user(1, "alice")
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let store = SessionStore::new();
        let session = store.snapshot();
        assert!(session.is_loading);
        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
        assert!(session.is_consistent());
    }

    #[test]
    fn successful_check_authenticates() {
        let api = FakeAuthApi::default();
        api.set_check(Ok(Some(alice())));
        let store = SessionStore::new();

        let session = block_on(store.check_auth_status(&api));

        assert_eq!(
            session,
            Session { is_authenticated: true, user: Some(alice()), is_loading: false }
        );
        assert_eq!(api.calls(), vec!["check".to_string()]);
    }

    #[test]
    fn failed_check_is_unauthenticated() {
        let api = FakeAuthApi::default();
        api.set_check(Err(http_error(401, None)));
        let store = SessionStore::new();
        store.set_user(Some(alice()));

        let session = block_on(store.check_auth_status(&api));

        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
        assert!(!session.is_loading);
    }

    #[test]
    fn null_check_is_unauthenticated() {
        let api = FakeAuthApi::default();
        api.set_check(Ok(None));
        let store = SessionStore::new();

        let session = block_on(store.check_auth_status(&api));

        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[test]
    fn check_runs_exactly_once() {
        let api = FakeAuthApi::default();
        api.set_check(Ok(Some(alice())));
        let store = SessionStore::new();

        block_on(store.check_auth_status(&api));
        store.set_auth_status(false);
        let second = block_on(store.check_auth_status(&api));

        assert_eq!(api.calls().len(), 1);
        assert!(!second.is_authenticated);
    }

    #[test]
    fn result_after_teardown_is_dropped() {
        let api = FakeAuthApi::default();
        api.set_check(Ok(Some(alice())));
        let store = SessionStore::new();
        store.teardown();

        let session = block_on(store.check_auth_status(&api));

        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
        assert!(session.is_loading);
    }

    #[test]
    fn setters_notify_subscribers() {
        let store = SessionStore::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            store.notifier().subscribe(move || hits.set(hits.get() + 1));
        }
        store.set_user(Some(alice()));
        store.set_auth_status(true);
        assert_eq!(hits.get(), 2);
        assert!(store.snapshot().is_consistent());
    }

    #[test]
    fn authenticated_without_user_is_inconsistent_after_loading() {
        let session = Session { is_authenticated: true, user: None, is_loading: false };
        assert!(!session.is_consistent());
    }

    #[test]
    fn reattached_store_accepts_login_again() {
        let store = SessionStore::new();
        store.teardown();
        store.set_user(Some(alice()));
        assert_eq!(store.user(), None);

        store.reattach();
        store.set_user(Some(alice()));
        store.set_auth_status(true);

        assert!(store.is_authenticated());
        assert_eq!(store.user(), Some(alice()));
    }

    #[test]
    fn late_check_does_not_override_login() {
        let api = FakeAuthApi::default();
        api.set_check(Ok(None));
        let gate = api.hold("check");
        let store = SessionStore::new();

        let session = block_on(async {
            let check = store.check_auth_status(&api);
            let login = async {
                store.set_user(Some(alice()));
                store.set_auth_status(true);
                let _ = gate.send(());
            };
            let (session, ()) = futures::join!(check, login);
            session
        });

        assert_eq!(
            session,
            Session { is_authenticated: true, user: Some(alice()), is_loading: false }
        );
    }
}
