// ==========================================
// Inventário de Impressoras - Camada de aplicação
// ==========================================

pub mod session;
pub mod state;

pub use session::{SessionStore, ViewSnapshot};
pub use state::AppState;
