// ==========================================
// Inventário de Impressoras - Perfis de acesso
// ==========================================
// Alinhado à tabela profiles
// A senha é transitória (write-only): entra no provisionamento,
// vira hash e nunca é lida de volta pelas APIs
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// UserRole - Papel do usuário
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

// ==========================================
// UserProfile - Perfil persistido
// ==========================================
// Nunca carrega senha nem hash: o hash fica confinado ao
// repositório e ao serviço de autenticação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// NewUser - Dados de provisionamento
// ==========================================
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    /// Senha em texto claro, consumida apenas no sign_up
    pub password: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("user"), Some(UserRole::User));
        assert_eq!(UserRole::from_str("root"), None);
    }
}
