// ============================================================================
// FRIEND PANEL VIEWMODEL - Búsqueda, solicitudes y lista de amigos
// ============================================================================
// Lógica del panel lateral. Devuelve resultados, no toca el DOM salvo a
// través del `ScrollLock` inyectado.
// Todas las actualizaciones locales son optimistas y sin rollback.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::dom::ScrollLock;
use crate::models::{FriendAction, Pageable, User};
use crate::services::FriendsApi;
use crate::state::{FriendPanelState, PanelPhase};

/// Parámetros de paginación del panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPaging {
    pub search_size: u32,
    pub list_size: u32,
    pub sort: Option<String>,
    pub invitation_fallback: String,
}

impl From<&AppConfig> for PanelPaging {
    fn from(config: &AppConfig) -> Self {
        Self {
            search_size: config.search_page_size,
            list_size: config.list_page_size,
            sort: config.default_sort.clone(),
            invitation_fallback: config.fallback_invitation_error.clone(),
        }
    }
}

pub struct FriendPanelViewModel<A: FriendsApi + ?Sized> {
    api: Rc<A>,
    state: FriendPanelState,
    scroll_lock: Rc<dyn ScrollLock>,
    paging: PanelPaging,
}

impl<A: FriendsApi + ?Sized> Clone for FriendPanelViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            scroll_lock: self.scroll_lock.clone(),
            paging: self.paging.clone(),
        }
    }
}

impl<A: FriendsApi + ?Sized> FriendPanelViewModel<A> {
    pub fn new(api: Rc<A>, state: FriendPanelState, scroll_lock: Rc<dyn ScrollLock>, paging: PanelPaging) -> Self {
        Self { api, state, scroll_lock, paging }
    }

    pub fn state(&self) -> &FriendPanelState {
        &self.state
    }

    fn list_pageable(&self) -> Pageable {
        Pageable::first(self.paging.list_size).with_sort(self.paging.sort.clone())
    }

    fn search_pageable(&self) -> Pageable {
        Pageable::first(self.paging.search_size).with_sort(self.paging.sort.clone())
    }

    /// Abre el panel: bloquea el scroll, pasa a `Loading` y carga ambas listas.
    /// Si ya está abierto no hace nada.
    pub async fn open(&self) {
        if self.state.is_open() {
            log::debug!("📂 [FRIENDS] Panel ya abierto");
            return;
        }
        let opening = self.state.next_opening();
        log::info!("📂 [FRIENDS] Abriendo panel (apertura #{})", opening);
        self.scroll_lock.lock();
        self.state.set_phase(PanelPhase::Loading);

        self.load_lists(opening).await;

        if self.state.opening() == opening && self.state.phase() == PanelPhase::Loading {
            self.state.set_phase(PanelPhase::Ready);
            log::info!("✅ [FRIENDS] Panel listo");
        }
    }

    /// Cierra el panel y desbloquea el scroll. Las respuestas en vuelo se descartan.
    pub fn close(&self) {
        if !self.state.is_open() {
            return;
        }
        self.state.next_opening();
        self.scroll_lock.unlock();
        self.state.set_phase(PanelPhase::Closed);
        log::info!("📁 [FRIENDS] Panel cerrado");
    }

    pub async fn toggle(&self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open().await;
        }
    }

    /// Las dos peticiones salen antes de esperar ninguna; cada una aplica su
    /// parte del estado de forma independiente.
    async fn load_lists(&self, opening: u64) {
        let requests_page = self.list_pageable();
        let friends_page = self.list_pageable();
        let (requests, friends) = futures::join!(
            self.api.received_requests(&requests_page),
            self.api.friends(&friends_page),
        );

        if self.state.opening() != opening {
            log::warn!("⚠️ [FRIENDS] Respuestas de una apertura anterior descartadas");
            return;
        }

        match requests {
            Ok(list) => {
                log::info!("📥 [FRIENDS] {} solicitudes recibidas", list.len());
                self.state.set_requests(list);
            }
            Err(e) => log::error!("❌ [FRIENDS] Error cargando solicitudes: {}", e),
        }
        match friends {
            Ok(list) => {
                log::info!("👥 [FRIENDS] {} amigos", list.len());
                self.state.set_friends(list);
            }
            Err(e) => log::error!("❌ [FRIENDS] Error cargando amigos: {}", e),
        }
    }

    /// Búsqueda por cada pulsación (sin debounce).
    /// Solo se aplica la respuesta de la consulta más reciente.
    pub async fn search(&self, query: &str) {
        self.state.set_search_query(query);
        let seq = self.state.next_search_seq();

        if query.is_empty() {
            self.state.set_search_results(Vec::new());
            return;
        }

        let result = self.api.search(query, &self.search_pageable()).await;

        if self.state.search_seq() != seq {
            log::debug!("🔍 [FRIENDS] Resultado obsoleto para '{}' descartado", query);
            return;
        }
        match result {
            Ok(users) => {
                log::debug!("🔍 [FRIENDS] '{}' -> {} resultados", query, users.len());
                self.state.set_search_results(users);
            }
            Err(e) => log::error!("❌ [FRIENDS] Error de búsqueda: {}", e),
        }
    }

    /// Acepta o rechaza. La solicitud desaparece de la lista al instante;
    /// tras la respuesta del servidor se recargan ambas listas.
    pub async fn respond_to_request(&self, action: FriendAction, nickname: &str) {
        let removed = self.state.remove_request(nickname);
        log::info!(
            "🤝 [FRIENDS] {} '{}' ({} entradas quitadas de la lista)",
            action.path_segment(),
            nickname,
            removed
        );

        match self.api.respond_to_request(action, nickname).await {
            Ok(()) => {
                if self.state.is_open() {
                    self.load_lists(self.state.opening()).await;
                }
            }
            Err(e) => log::error!("❌ [FRIENDS] Acción fallida: {}", e),
        }
    }

    /// Envía una invitación. El candidato se quita de los resultados antes de
    /// la respuesta y no se restaura si falla.
    /// Devuelve el mensaje a mostrar al usuario en caso de error.
    pub async fn send_invitation(&self, candidate: &User) -> Result<(), String> {
        self.state.remove_search_result(candidate.id);

        match self.api.send_request(&candidate.nick_name).await {
            Ok(()) => {
                log::info!("📨 [FRIENDS] Invitación enviada a {}", candidate.nick_name);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [FRIENDS] Error enviando invitación a {}: {}", candidate.nick_name, e);
                Err(e.user_message(&self.paging.invitation_fallback))
            }
        }
    }

    /// Logout: cierra el panel y olvida los datos del usuario anterior
    pub fn reset(&self) {
        self.close();
        self.state.reset();
        log::info!("🧹 [FRIENDS] Estado del panel reiniciado");
    }

    /// Cierre definitivo (desmontaje)
    pub fn teardown(&self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.scroll_lock.unlock();
        }
    }
}
