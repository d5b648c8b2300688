/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8080 (por defecto)
/// - Producción: via TOGETHER_API_URL (env var o .env)
pub const API_URL: &str = match option_env!("TOGETHER_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Nivel de log configurado en compilación (TOGETHER_LOG_LEVEL)
pub const LOG_LEVEL: Option<&str> = option_env!("TOGETHER_LOG_LEVEL");

/// Tamaño de página de la búsqueda de usuarios
pub const SEARCH_PAGE_SIZE: u32 = 5;

/// Tamaño de página de solicitudes recibidas y lista de amigos
pub const LIST_PAGE_SIZE: u32 = 10;

/// Clase CSS que bloquea el scroll del documento mientras el panel está abierto
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Id del elemento raíz de la aplicación
pub const ROOT_ELEMENT_ID: &str = "app";
