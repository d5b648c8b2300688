use serde::{Deserialize, Serialize};

/// Solicitud de amistad pendiente recibida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: i64,
    pub nick_name: String,
    pub email: String,
}

/// Amistad confirmada (solo lectura en esta UI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendEntry {
    pub id: i64,
    pub nick_name: String,
    pub email: String,
}

/// Respuesta a una solicitud pendiente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendAction {
    Accept,
    Reject,
}

impl FriendAction {
    /// Segmento final de la ruta `/friends/requests/{nickname}/{accept|reject}`
    pub fn path_segment(self) -> &'static str {
        match self {
            FriendAction::Accept => "accept",
            FriendAction::Reject => "reject",
        }
    }
}
