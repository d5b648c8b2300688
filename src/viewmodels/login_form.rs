use crate::models::LoginRequest;
use crate::utils::validation::validate_email;
use crate::viewmodels::form::FieldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Estado del formulario de login
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: FieldState,
    pub password: FieldState,
    pub banner: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    pub fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Valida cada campo por separado; `true` si todos pasan
    pub fn validate(&mut self) -> bool {
        let email_error = validate_email(&self.email.value);
        self.email.set_error(email_error);

        // La contraseña no se recorta: solo cuenta si está vacía
        let password_error = self
            .password
            .value
            .is_empty()
            .then(|| "Password is required".to_string());
        self.password.set_error(password_error);

        self.email.is_valid() && self.password.is_valid()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
        }
    }
}
