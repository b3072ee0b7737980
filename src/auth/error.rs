// ==========================================
// Inventário de Impressoras - Erros de autenticação
// ==========================================

use thiserror::Error;

/// Erros do serviço de autenticação
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,

    #[error("Nome de usuário já em uso: {0}")]
    UsernameTaken(String),

    #[error("Senha muito curta: mínimo de {0} caracteres")]
    WeakPassword(usize),

    #[error("Falha ao processar credencial: {0}")]
    HashingError(String),

    #[error("Falha ao obter lock da sessão: {0}")]
    LockError(String),

    #[error("Falha em consulta ao banco: {0}")]
    DatabaseQueryError(String),

    #[error("Perfil não encontrado: {0}")]
    ProfileNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<crate::repository::error::RepositoryError> for AuthError {
    fn from(err: crate::repository::error::RepositoryError) -> Self {
        use crate::repository::error::RepositoryError;
        match err {
            RepositoryError::NotFound { id, .. } => AuthError::ProfileNotFound(id),
            RepositoryError::LockError(msg) => AuthError::LockError(msg),
            other => AuthError::DatabaseQueryError(other.to_string()),
        }
    }
}

/// Alias de Result do módulo
pub type AuthResult<T> = Result<T, AuthError>;
