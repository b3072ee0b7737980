// ==========================================
// Inventário de Impressoras - Auditoria
// ==========================================
// Responsabilidade: detectar alterações campo a campo e
// gerar os registros da trilha de auditoria
// ==========================================

pub mod change_set;

pub use change_set::{ChangeSetDiffer, TRACKED_FIELDS};
