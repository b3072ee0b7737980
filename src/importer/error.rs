// ==========================================
// Inventário de Impressoras - Erros do módulo de importação
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use thiserror::Error;

/// Erros do módulo de importação
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Erros de arquivo =====
    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (apenas .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Falha na leitura do arquivo: {0}")]
    FileReadError(String),

    #[error("Falha ao interpretar Excel: {0}")]
    ExcelParseError(String),

    #[error("Falha ao interpretar CSV: {0}")]
    CsvParseError(String),

    // ===== Erros de conteúdo =====
    #[error("A planilha está vazia")]
    EmptySheet,

    #[error("Nenhuma linha válida encontrada. Cabeçalhos detectados: {headers}")]
    NoValidRows { headers: String },

    // ===== Erros de banco =====
    #[error("Falha de conexão com o banco: {0}")]
    DatabaseConnectionError(String),

    #[error("Falha na transação do banco: {0}")]
    DatabaseTransactionError(String),

    #[error("Falha em consulta ao banco: {0}")]
    DatabaseQueryError(String),

    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    #[error("Falha ao obter lock da conexão: {0}")]
    LockError(String),

    // ===== Erros gerais =====
    #[error("Erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("UNIQUE") => {
                ImportError::UniqueConstraintViolation(msg.clone())
            }
            _ => ImportError::DatabaseQueryError(err.to_string()),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<crate::repository::error::RepositoryError> for ImportError {
    fn from(err: crate::repository::error::RepositoryError) -> Self {
        use crate::repository::error::RepositoryError;
        match err {
            RepositoryError::UniqueConstraintViolation(msg) => {
                ImportError::UniqueConstraintViolation(msg)
            }
            RepositoryError::LockError(msg) => ImportError::LockError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ImportError::DatabaseTransactionError(msg)
            }
            other => ImportError::DatabaseQueryError(other.to_string()),
        }
    }
}

/// Alias de Result do módulo
pub type ImportResult<T> = Result<T, ImportError>;
