// ==========================================
// Inventário de Impressoras - Biblioteca núcleo
// ==========================================
// Stack: Rust + SQLite
// Escopo: inventário de ativos de impressão por unidade,
//         com trilha de auditoria e importação de planilhas
// ==========================================

// Inicializa o sistema de internacionalização
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de repositórios - acesso a dados
pub mod repository;

// Camada de importação - planilhas externas
pub mod importer;

// Camada de exportação - backup em planilha
pub mod exporter;

// Auditoria - diff de alterações campo a campo
pub mod audit;

// Autenticação - credenciais e sessão
pub mod auth;

// Infraestrutura de banco (conexão/PRAGMA/schema unificados)
pub mod db;

// Sistema de logs
pub mod logging;

// Internacionalização
pub mod i18n;

// Configuração do sistema
pub mod config;

// Camada de API - interfaces de negócio
pub mod api;

// Camada de aplicação - estado e sessão
pub mod app;

// ==========================================
// Reexportação de tipos centrais
// ==========================================

// Entidades de domínio
pub use domain::{CollectingStatus, HistoryEntry, InstallMode, Printer, UserProfile, UserRole};

// Auditoria
pub use audit::ChangeSetDiffer;

// API
pub use api::{BackupApi, DashboardApi, InventoryApi, UserApi};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Inventário de Impressoras PCCE";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
