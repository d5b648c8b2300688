use serde::{Deserialize, Serialize};

/// Usuario tal como lo devuelve el backend (`UserDto`).
/// Registro opaco: no se derivan campos localmente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub nick_name: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// Nombre visible en la cabecera del panel de amigos
    pub fn display_name(&self) -> &str {
        &self.nick_name
    }
}
