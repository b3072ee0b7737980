// ==========================================
// Inventário de Impressoras - Configuração do aplicativo
// ==========================================
// Responsabilidade: caminho do banco (com override por variável
// de ambiente) e idioma padrão da interface
// ==========================================

use std::path::PathBuf;

/// Variável de ambiente para apontar o banco explicitamente
/// (útil em depuração/testes/CI)
pub const DB_PATH_ENV: &str = "INVENTARIO_DB_PATH";

/// Configuração carregada na inicialização
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Caminho do arquivo SQLite
    pub db_path: String,
    /// Idioma da interface ("pt-BR" ou "en")
    pub locale: String,
}

impl AppConfig {
    /// Monta a configuração a partir do ambiente
    pub fn from_env() -> Self {
        Self {
            db_path: get_default_db_path(),
            locale: std::env::var("INVENTARIO_LOCALE").unwrap_or_else(|_| "pt-BR".to_string()),
        }
    }
}

/// Resolve o caminho padrão do banco de dados
///
/// # Retorno
/// - Se INVENTARIO_DB_PATH estiver definida: o valor informado
/// - Desenvolvimento: diretório de dados do usuário/inventario-impressoras-dev/inventario.db
/// - Produção: diretório de dados do usuário/inventario-impressoras/inventario.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // Valor de retorno padrão caso o diretório de dados não exista
    let mut path = PathBuf::from("./inventario.db");

    if let Some(data_dir) = dirs::data_dir() {
        // Ambiente de desenvolvimento usa diretório separado
        // para não poluir os dados de produção
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("inventario-impressoras-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("inventario-impressoras");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("inventario.db");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    #[test]
    fn test_from_env_locale_padrao() {
        let cfg = AppConfig::from_env();
        assert!(!cfg.db_path.is_empty());
        assert!(!cfg.locale.is_empty());
    }
}
