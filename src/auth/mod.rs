// ==========================================
// Inventário de Impressoras - Autenticação
// ==========================================

pub mod error;
pub mod service;

pub use error::{AuthError, AuthResult};
pub use service::{AuthService, Session, MIN_PASSWORD_LEN};
