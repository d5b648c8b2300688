// ============================================================================
// FRIEND PANEL STATE - Estado local del panel lateral de amigos
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::{FriendEntry, FriendRequest, User};
use crate::state::reactivity::ChangeNotifier;

/// Ciclo de vida de cada apertura del panel: closed → loading → ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Loading,
    Ready,
}

/// Estado del panel (clone = handle compartido)
#[derive(Clone)]
pub struct FriendPanelState {
    phase: Rc<Cell<PanelPhase>>,
    search_query: Rc<RefCell<String>>,
    search_results: Rc<RefCell<Vec<User>>>,
    requests: Rc<RefCell<Vec<FriendRequest>>>,
    friends: Rc<RefCell<Vec<FriendEntry>>>,
    // Generación de apertura: las respuestas de una apertura anterior se descartan
    opening: Rc<Cell<u64>>,
    // Secuencia de búsqueda: solo se aplica la respuesta de la última consulta
    search_seq: Rc<Cell<u64>>,
    notifier: ChangeNotifier,
}

impl FriendPanelState {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(Cell::new(PanelPhase::Closed)),
            search_query: Rc::new(RefCell::new(String::new())),
            search_results: Rc::new(RefCell::new(Vec::new())),
            requests: Rc::new(RefCell::new(Vec::new())),
            friends: Rc::new(RefCell::new(Vec::new())),
            opening: Rc::new(Cell::new(0)),
            search_seq: Rc::new(Cell::new(0)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase.get()
    }

    pub fn is_open(&self) -> bool {
        self.phase.get() != PanelPhase::Closed
    }

    pub fn is_loading(&self) -> bool {
        self.phase.get() == PanelPhase::Loading
    }

    pub fn search_query(&self) -> String {
        self.search_query.borrow().clone()
    }

    pub fn search_results(&self) -> Vec<User> {
        self.search_results.borrow().clone()
    }

    pub fn requests(&self) -> Vec<FriendRequest> {
        self.requests.borrow().clone()
    }

    pub fn friends(&self) -> Vec<FriendEntry> {
        self.friends.borrow().clone()
    }

    pub fn opening(&self) -> u64 {
        self.opening.get()
    }

    pub fn search_seq(&self) -> u64 {
        self.search_seq.get()
    }

    pub(crate) fn set_phase(&self, phase: PanelPhase) {
        self.phase.set(phase);
        self.notifier.notify();
    }

    /// Nueva generación de apertura (abrir o cerrar invalida lo que esté en vuelo)
    pub(crate) fn next_opening(&self) -> u64 {
        let next = self.opening.get() + 1;
        self.opening.set(next);
        next
    }

    pub(crate) fn next_search_seq(&self) -> u64 {
        let next = self.search_seq.get() + 1;
        self.search_seq.set(next);
        next
    }

    pub(crate) fn set_search_query(&self, query: &str) {
        *self.search_query.borrow_mut() = query.to_string();
    }

    pub(crate) fn set_search_results(&self, results: Vec<User>) {
        *self.search_results.borrow_mut() = results;
        self.notifier.notify();
    }

    pub(crate) fn set_requests(&self, requests: Vec<FriendRequest>) {
        *self.requests.borrow_mut() = requests;
        self.notifier.notify();
    }

    pub(crate) fn set_friends(&self, friends: Vec<FriendEntry>) {
        *self.friends.borrow_mut() = friends;
        self.notifier.notify();
    }

    /// Quita de la lista visible toda solicitud con ese nickname
    pub(crate) fn remove_request(&self, nickname: &str) -> usize {
        let removed = {
            let mut requests = self.requests.borrow_mut();
            let before = requests.len();
            requests.retain(|r| r.nick_name != nickname);
            before - requests.len()
        };
        if removed > 0 {
            self.notifier.notify();
        }
        removed
    }

    /// Quita un candidato de los resultados de búsqueda
    pub(crate) fn remove_search_result(&self, user_id: i64) -> bool {
        let removed = {
            let mut results = self.search_results.borrow_mut();
            let before = results.len();
            results.retain(|u| u.id != user_id);
            before != results.len()
        };
        if removed {
            self.notifier.notify();
        }
        removed
    }

    /// Vacía todo lo ligado al usuario (logout). Las respuestas en vuelo
    /// de aperturas o búsquedas anteriores quedan invalidadas.
    pub(crate) fn reset(&self) {
        self.next_opening();
        self.next_search_seq();
        self.search_query.borrow_mut().clear();
        self.search_results.borrow_mut().clear();
        self.requests.borrow_mut().clear();
        self.friends.borrow_mut().clear();
        self.notifier.notify();
    }
}

impl Default for FriendPanelState {
    fn default() -> Self {
        Self::new()
    }
}
