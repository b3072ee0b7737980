// ==========================================
// Inventário de Impressoras - Erros do módulo de exportação
// ==========================================

use thiserror::Error;

/// Erros do módulo de exportação
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Não há dados para exportar")]
    EmptyInventory,

    #[error("Falha ao montar a planilha: {0}")]
    WorkbookError(String),

    #[error("Falha em consulta ao banco: {0}")]
    DatabaseQueryError(String),

    #[error("Falha ao obter lock da conexão: {0}")]
    LockError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::WorkbookError(err.to_string())
    }
}

impl From<crate::repository::error::RepositoryError> for ExportError {
    fn from(err: crate::repository::error::RepositoryError) -> Self {
        use crate::repository::error::RepositoryError;
        match err {
            RepositoryError::LockError(msg) => ExportError::LockError(msg),
            other => ExportError::DatabaseQueryError(other.to_string()),
        }
    }
}

/// Alias de Result do módulo
pub type ExportResult<T> = Result<T, ExportError>;
