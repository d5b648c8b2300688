// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Crea el estado una vez por carga de página, conecta los viewmodels con el
// ApiClient y decide entre re-render completo o incremental.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{self, get_element_by_id, BodyScrollLock};
use crate::services::ApiClient;
use crate::state::{AppState, IncrementalUpdate, Route, UpdateType};
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::viewmodels::{FriendPanelViewModel, LoginForm, PanelPaging, RegisterForm, SessionViewModel, SubmitOutcome};
use crate::views::{render_app, update_friend_panel};

/// Todo lo que necesitan las vistas: estado, viewmodels y formularios
#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub session_vm: SessionViewModel<ApiClient>,
    pub panel_vm: FriendPanelViewModel<ApiClient>,
    pub login_form: Rc<RefCell<LoginForm>>,
    pub register_form: Rc<RefCell<RegisterForm>>,
}

impl AppContext {
    pub fn new(config: AppConfig, initial_route: Route) -> Self {
        let api = Rc::new(ApiClient::new(config.api_base_url.clone()));
        let state = AppState::new(config, initial_route);
        let session_vm = SessionViewModel::new(api.clone(), state.session.clone(), &state.config);
        let panel_vm = FriendPanelViewModel::new(
            api,
            state.friends.clone(),
            Rc::new(BodyScrollLock),
            PanelPaging::from(&state.config),
        );

        Self {
            state,
            session_vm,
            panel_vm,
            login_form: Rc::new(RefCell::new(LoginForm::default())),
            register_form: Rc::new(RefCell::new(RegisterForm::default())),
        }
    }

    /// pushState + cambio de ruta (el notifier dispara el re-render)
    pub fn navigate(&self, route: Route) {
        dom::push_path(route.path());
        self.state.route.set(route);
    }

    /// Resultado de un submit: navegar o repintar errores/banner
    pub fn after_submit(&self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Navigate(route) => self.navigate(route),
            SubmitOutcome::Blocked | SubmitOutcome::Failed => crate::rerender_app(),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Logout: sesión local limpia al instante, panel cerrado, `/login`,
    /// y `POST /auth/logout` en segundo plano.
    pub fn logout(&self) {
        self.panel_vm.reset();
        let target = self.session_vm.logout();
        self.navigate(target);

        let vm = self.session_vm.clone();
        spawn_local(async move {
            vm.end_server_session().await;
        });
    }

    /// Descarga de la página: ignorar respuestas tardías y soltar el scroll
    pub fn teardown(&self) {
        self.panel_vm.teardown();
        self.state.session.teardown();
    }

    /// Página restaurada desde la bfcache: la misma instancia vuelve a vivir
    pub fn resume(&self) {
        self.state.session.reattach();
    }
}

/// Aplicación principal
pub struct App {
    ctx: AppContext,
    root: Element,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let ctx = AppContext::new(config, Route::from_path(&dom::current_path()));

        // Batching: varias notificaciones en el mismo tick => un solo render
        let pending: Rc<RefCell<Option<UpdateType>>> = Rc::new(RefCell::new(None));
        ctx.state.subscribe_to_changes(move |update| {
            use gloo_timers::callback::Timeout;
            let already_scheduled = {
                let mut slot = pending.borrow_mut();
                let scheduled = slot.is_some();
                let merged = match slot.take() {
                    Some(previous) => previous.merge(update),
                    None => update,
                };
                *slot = Some(merged);
                scheduled
            };
            if already_scheduled {
                return;
            }
            let pending = pending.clone();
            Timeout::new(0, move || {
                if let Some(update) = pending.borrow_mut().take() {
                    crate::rerender_app_with_type(update);
                }
            })
            .forget();
        });

        // Comprobación inicial de sesión
        {
            let vm = ctx.session_vm.clone();
            spawn_local(async move {
                let session = vm.check_auth_status().await;
                log::info!(
                    "🔎 [APP] Sesión inicial: autenticado={} usuario={:?}",
                    session.is_authenticated,
                    session.user.as_ref().map(|u| u.nick_name.as_str())
                );
            });
        }

        Ok(Self { ctx, root })
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Re-render completo
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render() en {}", self.ctx.state.route.current().path());
        dom::clear_children(&self.root);
        let view = render_app(&self.ctx)?;
        dom::append_child(&self.root, &view)
    }

    /// Actualización incremental; `Err` pide un render completo
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::FriendPanel => update_friend_panel(&self.ctx),
        }
    }

    /// Cambio de ruta desde el navegador (atrás/adelante)
    pub fn on_location_change(&self, path: &str) {
        self.ctx.state.route.set(Route::from_path(path));
    }
}
