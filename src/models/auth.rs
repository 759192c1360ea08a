use serde::{Deserialize, Serialize};

/// Rol del usuario autenticado
///
/// Todas las reglas de acciones hacen `match` exhaustivo sobre este enum,
/// así un rol nuevo obliga a revisar cada regla al compilar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Mentor,
    Mentorado,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Mentor => "Mentor",
            Role::Mentorado => "Mentorado",
        }
    }
}

/// Usuario actual (cargado una vez por sesión de navegador)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CurrentUser {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"MENTOR\"");
        assert_eq!(serde_json::to_string(&Role::Mentorado).unwrap(), "\"MENTORADO\"");
    }

    #[test]
    fn test_current_user_without_email() {
        let user: CurrentUser = serde_json::from_str(r#"{"id":3,"role":"MENTORADO"}"#).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::Mentorado);
        assert!(user.email.is_none());
    }
}
