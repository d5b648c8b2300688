// ============================================================================
// APP STATE - Estado de la aplicación (uno por instancia de App)
// ============================================================================

use crate::config::AppConfig;
use crate::state::{FriendPanelState, Route, RouteState, SessionStore};

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout, cambio de ruta)
    FullRender,
}

impl UpdateType {
    /// Combina dos actualizaciones pendientes; el render completo absorbe al incremental
    pub fn merge(self, other: UpdateType) -> UpdateType {
        match (self, other) {
            (UpdateType::Incremental(a), UpdateType::Incremental(b)) if a == b => UpdateType::Incremental(a),
            _ => UpdateType::FullRender,
        }
    }
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Listas del panel de amigos (sin tocar el input de búsqueda)
    FriendPanel,
}

/// Estado de la aplicación, inyectado en vistas y viewmodels
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionStore,
    pub friends: FriendPanelState,
    pub route: RouteState,
}

impl AppState {
    pub fn new(config: AppConfig, initial_route: Route) -> Self {
        Self {
            config,
            session: SessionStore::new(),
            friends: FriendPanelState::new(),
            route: RouteState::new(initial_route),
        }
    }

    /// Conecta los stores con el callback de re-render.
    /// Sesión y ruta => render completo; panel => incremental.
    pub fn subscribe_to_changes<F>(&self, on_update: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        let on_update = std::rc::Rc::new(on_update);
        {
            let cb = on_update.clone();
            self.session.notifier().subscribe(move || cb(UpdateType::FullRender));
        }
        {
            let cb = on_update.clone();
            self.route.notifier().subscribe(move || cb(UpdateType::FullRender));
        }
        self.friends
            .notifier()
            .subscribe(move || on_update(UpdateType::Incremental(IncrementalUpdate::FriendPanel)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn store_changes_map_to_update_types() {
        let state = AppState::new(AppConfig::default(), Route::Home);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe_to_changes(move |u| seen.borrow_mut().push(u));
        }

        state.session.set_auth_status(true);
        state.friends.set_friends(Vec::new());
        state.route.set(Route::Login);

        assert_eq!(
            *seen.borrow(),
            vec![
                UpdateType::FullRender,
                UpdateType::Incremental(IncrementalUpdate::FriendPanel),
                UpdateType::FullRender,
            ]
        );
    }

    #[test]
    fn pending_updates_merge_towards_full_render() {
        let panel = UpdateType::Incremental(IncrementalUpdate::FriendPanel);
        assert_eq!(panel.clone().merge(panel.clone()), panel);
        assert_eq!(panel.clone().merge(UpdateType::FullRender), UpdateType::FullRender);
        assert_eq!(UpdateType::FullRender.merge(panel), UpdateType::FullRender);
    }
}
