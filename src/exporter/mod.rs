// ==========================================
// Inventário de Impressoras - Módulo de exportação
// ==========================================

pub mod backup_exporter;
pub mod error;

pub use backup_exporter::{BackupExporter, ExportedBackup, EXPORT_HEADERS, SHEET_NAME};
pub use error::{ExportError, ExportResult};
