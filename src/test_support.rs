// ============================================================================
// TEST SUPPORT - Fakes en memoria de AuthApi / FriendsApi
// ============================================================================
// Registran cada llamada y permiten retener una respuesta con un "gate"
// (oneshot) para simular peticiones en vuelo.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use async_trait::async_trait;
use futures::channel::oneshot;
use crate::models::{FriendAction, FriendEntry, FriendRequest, LoginRequest, Pageable, RegisterRequest, User};
use crate::services::{ApiError, AuthApi, FriendsApi};

pub(crate) fn user(id: i64, nick: &str) -> User {
    User {
        id,
        nick_name: nick.to_string(),
        email: format!("{}@example.com", nick),
        first_name: None,
        last_name: None,
    }
}

pub(crate) fn request(id: i64, nick: &str) -> FriendRequest {
    FriendRequest { id, nick_name: nick.to_string(), email: format!("{}@example.com", nick) }
}

pub(crate) fn friend(id: i64, nick: &str) -> FriendEntry {
    FriendEntry { id, nick_name: nick.to_string(), email: format!("{}@example.com", nick) }
}

pub(crate) fn http_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Http {
        status,
        body: message.map(|m| crate::models::ApiErrorBody {
            message: Some(m.to_string()),
            ..Default::default()
        }),
    }
}

/// Gates por clave de operación: la llamada espera hasta que el test la libere
#[derive(Default)]
struct Gates {
    pending: RefCell<HashMap<String, oneshot::Receiver<()>>>,
}

impl Gates {
    fn hold(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(key.to_string(), rx);
        tx
    }

    async fn wait(&self, key: &str) {
        let gate = self.pending.borrow_mut().remove(key);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

// ----------------------------------------------------------------------------
// AUTH
// ----------------------------------------------------------------------------

pub(crate) struct FakeAuthApi {
    calls: RefCell<Vec<String>>,
    login_result: RefCell<Result<User, ApiError>>,
    register_result: RefCell<Result<User, ApiError>>,
    logout_result: RefCell<Result<(), ApiError>>,
    check_result: RefCell<Result<Option<User>, ApiError>>,
    last_login: RefCell<Option<LoginRequest>>,
    last_register: RefCell<Option<RegisterRequest>>,
    gates: Gates,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login_result: RefCell::new(Err(http_error(403, None))),
            register_result: RefCell::new(Err(http_error(400, None))),
            logout_result: RefCell::new(Ok(())),
            check_result: RefCell::new(Ok(None)),
            last_login: RefCell::new(None),
            last_register: RefCell::new(None),
            gates: Gates::default(),
        }
    }
}

impl FakeAuthApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn set_login(&self, result: Result<User, ApiError>) {
        *self.login_result.borrow_mut() = result;
    }

    pub(crate) fn set_register(&self, result: Result<User, ApiError>) {
        *self.register_result.borrow_mut() = result;
    }

    pub(crate) fn set_logout(&self, result: Result<(), ApiError>) {
        *self.logout_result.borrow_mut() = result;
    }

    pub(crate) fn set_check(&self, result: Result<Option<User>, ApiError>) {
        *self.check_result.borrow_mut() = result;
    }

    pub(crate) fn last_login(&self) -> Option<LoginRequest> {
        self.last_login.borrow().clone()
    }

    pub(crate) fn last_register(&self) -> Option<RegisterRequest> {
        self.last_register.borrow().clone()
    }

    pub(crate) fn hold(&self, key: &str) -> oneshot::Sender<()> {
        self.gates.hold(key)
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.calls.borrow_mut().push("login".into());
        *self.last_login.borrow_mut() = Some(request.clone());
        self.gates.wait("login").await;
        self.login_result.borrow().clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.calls.borrow_mut().push("register".into());
        *self.last_register.borrow_mut() = Some(request.clone());
        self.gates.wait("register").await;
        self.register_result.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("logout".into());
        self.gates.wait("logout").await;
        self.logout_result.borrow().clone()
    }

    async fn check(&self) -> Result<Option<User>, ApiError> {
        self.calls.borrow_mut().push("check".into());
        self.gates.wait("check").await;
        self.check_result.borrow().clone()
    }
}

// ----------------------------------------------------------------------------
// FRIENDS
// ----------------------------------------------------------------------------

type Hook = Box<dyn Fn()>;

pub(crate) struct FakeFriendsApi {
    calls: RefCell<Vec<String>>,
    requests: RefCell<Result<Vec<FriendRequest>, ApiError>>,
    friends: RefCell<Result<Vec<FriendEntry>, ApiError>>,
    search: RefCell<HashMap<String, Result<Vec<User>, ApiError>>>,
    send_result: RefCell<Result<(), ApiError>>,
    respond_result: RefCell<Result<(), ApiError>>,
    on_received_requests: RefCell<Option<Hook>>,
    gates: Gates,
}

impl Default for FakeFriendsApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            requests: RefCell::new(Ok(Vec::new())),
            friends: RefCell::new(Ok(Vec::new())),
            search: RefCell::new(HashMap::new()),
            send_result: RefCell::new(Ok(())),
            respond_result: RefCell::new(Ok(())),
            on_received_requests: RefCell::new(None),
            gates: Gates::default(),
        }
    }
}

impl FakeFriendsApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub(crate) fn set_requests(&self, result: Result<Vec<FriendRequest>, ApiError>) {
        *self.requests.borrow_mut() = result;
    }

    pub(crate) fn set_friends(&self, result: Result<Vec<FriendEntry>, ApiError>) {
        *self.friends.borrow_mut() = result;
    }

    pub(crate) fn set_search(&self, query: &str, result: Result<Vec<User>, ApiError>) {
        self.search.borrow_mut().insert(query.to_string(), result);
    }

    pub(crate) fn set_send(&self, result: Result<(), ApiError>) {
        *self.send_result.borrow_mut() = result;
    }

    pub(crate) fn set_respond(&self, result: Result<(), ApiError>) {
        *self.respond_result.borrow_mut() = result;
    }

    /// Callback ejecutado al emitir `GET /friends/requests/received`
    pub(crate) fn on_received_requests<F: Fn() + 'static>(&self, hook: F) {
        *self.on_received_requests.borrow_mut() = Some(Box::new(hook));
    }

    pub(crate) fn hold(&self, key: &str) -> oneshot::Sender<()> {
        self.gates.hold(key)
    }
}

#[async_trait(?Send)]
impl FriendsApi for FakeFriendsApi {
    async fn send_request(&self, nickname: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("send {}", nickname));
        self.gates.wait("send").await;
        self.send_result.borrow().clone()
    }

    async fn respond_to_request(&self, action: FriendAction, nickname: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{} {}", action.path_segment(), nickname));
        self.gates.wait("respond").await;
        self.respond_result.borrow().clone()
    }

    async fn friends(&self, pageable: &Pageable) -> Result<Vec<FriendEntry>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("friends page={} size={}", pageable.page, pageable.size));
        self.gates.wait("friends").await;
        self.friends.borrow().clone()
    }

    async fn received_requests(&self, pageable: &Pageable) -> Result<Vec<FriendRequest>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("requests page={} size={}", pageable.page, pageable.size));
        if let Some(hook) = self.on_received_requests.borrow().as_ref() {
            hook();
        }
        self.gates.wait("requests").await;
        self.requests.borrow().clone()
    }

    async fn search(&self, query: &str, pageable: &Pageable) -> Result<Vec<User>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("search {} page={} size={}", query, pageable.page, pageable.size));
        self.gates.wait(&format!("search {}", query)).await;
        self.search
            .borrow()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
