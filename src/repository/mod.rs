// ==========================================
// Inventário de Impressoras - Camada de repositórios
// ==========================================
// Linha vermelha: repositório não faz regra de negócio,
// apenas mapeamento de dados
// ==========================================

pub mod error;
pub mod history_repo;
pub mod printer_repo;
pub mod profile_repo;

// Reexportação dos tipos centrais
pub use error::{RepositoryError, RepositoryResult};
pub use history_repo::HistoryRepository;
pub use printer_repo::PrinterRepository;
pub use profile_repo::ProfileRepository;
