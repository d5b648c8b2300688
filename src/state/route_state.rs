// ============================================================================
// ROUTE STATE - Ruta actual y layout asociado
// ============================================================================
// El layout se elige SOLO por la ruta, nunca por el estado de sesión
// (no hay redirección automática para usuarios no autenticados).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::reactivity::ChangeNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or("");
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::NotFound(path) => path,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::for_route(self)
    }
}

/// Variante de layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Login / registro: sin navbar ni footer
    Bare,
    /// Navbar + contenido + footer
    Main,
}

impl Layout {
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Login | Route::Register => Layout::Bare,
            Route::Home | Route::NotFound(_) => Layout::Main,
        }
    }
}

#[derive(Clone)]
pub struct RouteState {
    current: Rc<RefCell<Route>>,
    notifier: ChangeNotifier,
}

impl RouteState {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Rc::new(RefCell::new(initial)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    /// Cambia de ruta; devuelve `false` si ya estábamos en ella
    pub fn set(&self, route: Route) -> bool {
        if *self.current.borrow() == route {
            return false;
        }
        log::info!("🧭 [ROUTER] {} -> {}", self.current.borrow().path(), route.path());
        *self.current.borrow_mut() = route;
        self.notifier.notify();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/register?ref=nav"), Route::Register);
        assert_eq!(Route::from_path("/rooms"), Route::NotFound("/rooms".into()));
    }

    #[test]
    fn layout_depends_only_on_path() {
        assert_eq!(Route::Login.layout(), Layout::Bare);
        assert_eq!(Route::Register.layout(), Layout::Bare);
        assert_eq!(Route::Home.layout(), Layout::Main);
        assert_eq!(Route::NotFound("/x".into()).layout(), Layout::Main);
    }

    #[test]
    fn setting_same_route_does_not_notify() {
        let state = RouteState::new(Route::Home);
        let hits = Rc::new(std::cell::Cell::new(0));
        {
            let hits = hits.clone();
            state.notifier().subscribe(move || hits.set(hits.get() + 1));
        }
        assert!(!state.set(Route::Home));
        assert!(state.set(Route::Login));
        assert_eq!(hits.get(), 1);
        assert_eq!(state.current().path(), "/login");
    }
}
