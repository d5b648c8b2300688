use crate::models::RegisterRequest;
use crate::utils::validation::{require, validate_email, MIN_PASSWORD_LEN};
use crate::viewmodels::form::FieldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FirstName,
    LastName,
    NickName,
    Email,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 6] = [
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::NickName,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    /// Id del input en el DOM
    pub fn id(self) -> &'static str {
        match self {
            RegisterField::FirstName => "firstName",
            RegisterField::LastName => "lastName",
            RegisterField::NickName => "nickName",
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Estado del formulario de registro
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub nick_name: FieldState,
    pub email: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
    pub banner: Option<String>,
    pub server_errors: Vec<String>,
    pub submitting: bool,
}

impl RegisterForm {
    pub fn field_mut(&mut self, field: RegisterField) -> &mut FieldState {
        match field {
            RegisterField::FirstName => &mut self.first_name,
            RegisterField::LastName => &mut self.last_name,
            RegisterField::NickName => &mut self.nick_name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn field(&self, field: RegisterField) -> &FieldState {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::NickName => &self.nick_name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn password_errors(&self) -> Vec<String> {
        let password = &self.password.value;
        if password.is_empty() {
            vec!["Password is required".to_string()]
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            vec![format!("Password should be at least {} characters long", MIN_PASSWORD_LEN)]
        } else {
            Vec::new()
        }
    }

    /// La confirmación acumula todos los errores aplicables
    fn confirmation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.confirm_password.value.is_empty() {
            errors.push("Confirmation password is required".to_string());
        }
        if self.confirm_password.value != self.password.value {
            errors.push("Passwords do not match".to_string());
        }
        errors
    }

    pub fn validate(&mut self) -> bool {
        let first = require(&self.first_name.value, "First name is required");
        self.first_name.set_error(first);
        let last = require(&self.last_name.value, "Last name is required");
        self.last_name.set_error(last);
        let nick = require(&self.nick_name.value, "Username is required");
        self.nick_name.set_error(nick);
        let email = validate_email(&self.email.value);
        self.email.set_error(email);
        let password = self.password_errors();
        self.password.set_errors(password);
        let confirmation = self.confirmation_errors();
        self.confirm_password.set_errors(confirmation);

        RegisterField::ALL.iter().all(|f| self.field(*f).is_valid())
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.value.trim().to_string(),
            last_name: self.last_name.value.trim().to_string(),
            nick_name: self.nick_name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        let mut form = RegisterForm::default();
        form.field_mut(RegisterField::FirstName).set_value("Alice");
        form.field_mut(RegisterField::LastName).set_value("Liddell");
        form.field_mut(RegisterField::NickName).set_value("alice");
        form.field_mut(RegisterField::Email).set_value("a@b.com");
        form.field_mut(RegisterField::Password).set_value("wonderland");
        form.field_mut(RegisterField::ConfirmPassword).set_value("wonderland");
        form
    }

    #[test]
    fn complete_form_is_valid() {
        let mut form = filled();
        assert!(form.validate());
        assert_eq!(form.to_request().nick_name, "alice");
    }

    #[test]
    fn empty_confirmation_accumulates_errors() {
        let mut form = filled();
        form.field_mut(RegisterField::ConfirmPassword).set_value("");
        assert!(!form.validate());
        assert_eq!(
            form.confirm_password.errors,
            vec!["Confirmation password is required".to_string(), "Passwords do not match".to_string()]
        );
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        for (password, confirm) in [("wonderland", "wonderlan"), ("abcdefgh", "ABCDEFGH"), ("wonderland", "wonderland ")] {
            let mut form = filled();
            form.field_mut(RegisterField::Password).set_value(password);
            form.field_mut(RegisterField::ConfirmPassword).set_value(confirm);
            assert!(!form.validate());
            assert!(form.confirm_password.errors.contains(&"Passwords do not match".to_string()));
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = filled();
        form.field_mut(RegisterField::Password).set_value("short");
        form.field_mut(RegisterField::ConfirmPassword).set_value("short");
        assert!(!form.validate());
        assert_eq!(
            form.password.errors,
            vec!["Password should be at least 8 characters long".to_string()]
        );
        assert!(form.confirm_password.is_valid());
    }

    #[test]
    fn blank_names_are_required() {
        let mut form = filled();
        form.field_mut(RegisterField::FirstName).set_value("   ");
        form.field_mut(RegisterField::NickName).set_value("");
        assert!(!form.validate());
        assert_eq!(form.first_name.error_text(), "First name is required");
        assert_eq!(form.nick_name.error_text(), "Username is required");
        assert!(form.last_name.is_valid());
    }

    #[test]
    fn field_ids_match_wire_names() {
        let ids: Vec<&str> = RegisterField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["firstName", "lastName", "nickName", "email", "password", "confirmPassword"]);
    }
}
