// ==========================================
// Inventário de Impressoras - Camada de API
// ==========================================
// Superfície consumida pela interface; cada API agrega os
// repositórios e serviços de que precisa
// ==========================================

pub mod backup_api;
pub mod dashboard_api;
pub mod error;
pub mod inventory_api;
pub mod permission;
pub mod user_api;

pub use backup_api::{BackupApi, WipeSummary};
pub use dashboard_api::{ConnectivityStats, DashboardApi, DashboardSummary, StationDensity};
pub use error::{ApiError, ApiResult};
pub use inventory_api::InventoryApi;
pub use user_api::UserApi;
