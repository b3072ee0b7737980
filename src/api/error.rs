// ==========================================
// Inventário de Impressoras - Erros da camada de API
// ==========================================
// Erros das camadas internas são convertidos via From; a API
// expõe mensagens prontas para a interface
// ==========================================

use crate::auth::error::AuthError;
use crate::exporter::error::ExportError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Erros da camada de API
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Entrada =====
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Validação falhou: {0}")]
    ValidationError(String),

    #[error("SELB já cadastrado: {0}")]
    DuplicateSelb(String),

    // ===== Autorização =====
    #[error("Permissão negada: {0}")]
    PermissionDenied(String),

    // ===== Recursos =====
    #[error("{entity} não encontrado: {id}")]
    NotFound { entity: String, id: String },

    // ===== Camadas internas =====
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // ===== Geral =====
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => ApiError::NotFound { entity, id },
            RepositoryError::UniqueConstraintViolation(msg) => ApiError::DuplicateSelb(msg),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

/// Alias de Result da camada
pub type ApiResult<T> = Result<T, ApiError>;
