// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Login, registro y logout sobre el SessionStore inyectado.
// Devuelve la ruta a la que navegar; la vista se encarga de navegar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::services::AuthApi;
use crate::state::{Route, Session, SessionStore};
use crate::viewmodels::form::SubmitOutcome;
use crate::viewmodels::login_form::LoginForm;
use crate::viewmodels::register_form::RegisterForm;

pub struct SessionViewModel<A: AuthApi + ?Sized> {
    api: Rc<A>,
    session: SessionStore,
    login_fallback: String,
    register_fallback: String,
}

impl<A: AuthApi + ?Sized> Clone for SessionViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            login_fallback: self.login_fallback.clone(),
            register_fallback: self.register_fallback.clone(),
        }
    }
}

impl<A: AuthApi + ?Sized> SessionViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionStore, config: &AppConfig) -> Self {
        Self {
            api,
            session,
            login_fallback: config.fallback_login_error.clone(),
            register_fallback: config.fallback_register_error.clone(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Comprobación inicial al cargar la página
    pub async fn check_auth_status(&self) -> Session {
        self.session.check_auth_status(self.api.as_ref()).await
    }

    /// Envía el login. Sin validación correcta no hay llamada de red.
    /// En éxito fija usuario + autenticado y navega a `/`.
    pub async fn login(&self, form: &RefCell<LoginForm>) -> SubmitOutcome {
        let request = {
            let mut form = form.borrow_mut();
            if form.submitting {
                return SubmitOutcome::Ignored;
            }
            if !form.validate() {
                log::info!("✋ [LOGIN] Formulario inválido, envío bloqueado");
                return SubmitOutcome::Blocked;
            }
            form.submitting = true;
            form.banner = None;
            form.to_request()
        };

        log::info!("🔐 [LOGIN] Iniciando login...");
        let result = self.api.login(&request).await;
        let mut form = form.borrow_mut();
        form.submitting = false;

        match result {
            Ok(user) => {
                log::info!("✅ [LOGIN] Login exitoso: {}", user.nick_name);
                self.session.set_user(Some(user));
                self.session.set_auth_status(true);
                SubmitOutcome::Navigate(Route::Home)
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Error en login: {}", e);
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.login_fallback.clone());
                form.banner = Some(message);
                SubmitOutcome::Failed
            }
        }
    }

    /// Envía el registro. En éxito navega a `/login` sin crear sesión.
    pub async fn register(&self, form: &RefCell<RegisterForm>) -> SubmitOutcome {
        let request = {
            let mut form = form.borrow_mut();
            if form.submitting {
                return SubmitOutcome::Ignored;
            }
            if !form.validate() {
                log::info!("✋ [REGISTER] Formulario inválido, envío bloqueado");
                return SubmitOutcome::Blocked;
            }
            form.submitting = true;
            form.banner = None;
            form.server_errors.clear();
            form.to_request()
        };

        log::info!("📝 [REGISTER] Registrando {}...", request.nick_name);
        let result = self.api.register(&request).await;
        let mut form = form.borrow_mut();
        form.submitting = false;

        match result {
            Ok(user) => {
                log::info!("✅ [REGISTER] Usuario creado: {} (id {})", user.nick_name, user.id);
                SubmitOutcome::Navigate(Route::Login)
            }
            Err(e) => {
                log::error!("❌ [REGISTER] Error en registro: {}", e);
                form.server_errors = e.validation_errors().to_vec();
                if form.server_errors.is_empty() {
                    let message = e
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| self.register_fallback.clone());
                    form.banner = Some(message);
                }
                SubmitOutcome::Failed
            }
        }
    }

    /// Logout local inmediato: no espera la respuesta del servidor.
    pub fn logout(&self) -> Route {
        log::info!("👋 [SESSION] Logout");
        self.session.set_user(None);
        self.session.set_auth_status(false);
        Route::Login
    }

    /// `POST /auth/logout` en segundo plano; los fallos solo se registran
    pub async fn end_server_session(&self) {
        match self.api.logout().await {
            Ok(()) => log::info!("✅ [SESSION] Sesión cerrada en el servidor"),
            Err(e) => log::warn!("⚠️ [SESSION] Error cerrando sesión en el servidor: {}", e),
        }
    }
}
