// ==========================================
// Inventário de Impressoras - Camada de domínio
// ==========================================
// Responsabilidade: entidades e tipos de negócio
// Linha vermelha: sem acesso a dados, sem IO
// ==========================================

pub mod history;
pub mod printer;
pub mod user;

// Reexportação dos tipos centrais
pub use history::HistoryEntry;
pub use printer::{CollectingStatus, InstallMode, Printer, PrinterInput};
pub use user::{NewUser, UserProfile, UserRole};
