// ============================================================================
// AUTH STATE - Token + usuario actual
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{CurrentUser, Role};

#[derive(Clone)]
pub struct AuthState {
    pub token: Rc<RefCell<Option<String>>>,
    pub current_user: Rc<RefCell<Option<CurrentUser>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            current_user: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn set_current_user(&self, user: Option<CurrentUser>) {
        *self.current_user.borrow_mut() = user;
    }

    pub fn get_current_user(&self) -> Option<CurrentUser> {
        self.current_user.borrow().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.borrow().as_ref().map(|u| u.role)
    }

    /// Hace falta token y usuario para considerar la sesión iniciada
    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some() && self.current_user.borrow().is_some()
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.set_token(None);
        self.set_current_user(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formulario de login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub error_message: Option<String>,
}

impl LoginForm {
    /// Devuelve las credenciales recortadas si ambas están presentes
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if self.submitting {
            return None;
        }
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            self.error_message = Some("Informe e-mail e senha.".to_string());
            return None;
        }
        self.submitting = true;
        self.error_message = None;
        Some((email.to_string(), self.password.clone()))
    }

    /// La senha se descarta: el campo se re-renderiza vacío
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.password.clear();
        self.error_message = Some(message);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_requires_both_fields() {
        let mut form = LoginForm { email: "  ".to_string(), password: "x".to_string(), ..Default::default() };
        assert_eq!(form.begin_submit(), None);
        assert!(form.error_message.is_some());

        form.email = " ana@uni.br ".to_string();
        assert_eq!(form.begin_submit(), Some(("ana@uni.br".to_string(), "x".to_string())));
        assert!(form.submitting);
        assert_eq!(form.begin_submit(), None);

        form.fail("Credenciais inválidas".to_string());
        assert!(!form.submitting);
        assert!(form.password.is_empty());
        assert_eq!(form.email, " ana@uni.br ");
    }

    #[test]
    fn test_login_requires_token_and_user() {
        let auth = AuthState::new();
        assert!(!auth.is_logged_in());

        auth.set_token(Some("abc".to_string()));
        assert!(!auth.is_logged_in());

        auth.set_current_user(Some(CurrentUser { id: 3, email: None, role: Role::Mentor }));
        assert!(auth.is_logged_in());
        assert_eq!(auth.role(), Some(Role::Mentor));

        auth.logout();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.role(), None);
    }
}
