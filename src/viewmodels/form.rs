/// Valor + errores de un campo de formulario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub errors: Vec<String>,
}

impl FieldState {
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Sustituye los errores del campo (vacío = válido)
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.errors = error.into_iter().collect();
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Texto mostrado bajo el campo (una línea por error)
    pub fn error_text(&self) -> String {
        self.errors.join("\n")
    }
}

/// Resultado de enviar un formulario
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// La validación local falló; no se hizo ninguna llamada
    Blocked,
    /// Ya había un envío en curso
    Ignored,
    /// El servidor rechazó la petición; el banner tiene el mensaje
    Failed,
    /// Éxito: navegar a esta ruta
    Navigate(crate::state::Route),
}
