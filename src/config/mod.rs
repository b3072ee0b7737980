// ==========================================
// Inventário de Impressoras - Camada de configuração
// ==========================================
// Responsabilidade: resolução do caminho do banco e idioma
// ==========================================

pub mod settings;

pub use settings::{get_default_db_path, AppConfig};
