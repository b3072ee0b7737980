// ==========================================
// Inventário de Impressoras - API de backup
// ==========================================
// Responsabilidade: importação de planilhas, exportação do
// backup e o wipe administrativo do inventário
// ==========================================

use crate::api::error::ApiResult;
use crate::api::permission::require_admin;
use crate::auth::Session;
use crate::exporter::backup_exporter::{BackupExporter, ExportedBackup};
use crate::importer::inventory_importer_impl::InventoryImporterImpl;
use crate::importer::inventory_importer_trait::{ImportSummary, InventoryImporter};
use crate::repository::history_repo::HistoryRepository;
use crate::repository::printer_repo::PrinterRepository;
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Contagens do wipe administrativo
#[derive(Debug, Serialize)]
pub struct WipeSummary {
    pub printers_removed: usize,
    pub history_removed: usize,
}

pub struct BackupApi {
    printer_repo: PrinterRepository,
    history_repo: HistoryRepository,
    importer: InventoryImporterImpl,
}

impl BackupApi {
    pub fn new(
        printer_repo: PrinterRepository,
        history_repo: HistoryRepository,
        importer: InventoryImporterImpl,
    ) -> Self {
        Self {
            printer_repo,
            history_repo,
            importer,
        }
    }

    /// Importa uma planilha de inventário (.xlsx/.xls/.csv)
    ///
    /// Restrito a admin. A gravação é transacional: em caso de
    /// erro (por exemplo SELB duplicado) nada é importado
    #[instrument(skip(self, session, file_path))]
    pub async fn import_file<P: AsRef<Path> + Send>(
        &self,
        session: &Session,
        file_path: P,
    ) -> ApiResult<ImportSummary> {
        require_admin(session)?;
        let summary = self.importer.import_file(file_path).await?;
        info!(
            user_id = %session.user_id,
            imported = summary.imported,
            rejected = summary.rejected,
            "Importação registrada"
        );
        Ok(summary)
    }

    /// Gera o backup completo do inventário em .xlsx
    ///
    /// Restrito a admin, como as demais operações de backup
    #[instrument(skip(self, session))]
    pub fn export_backup(&self, session: &Session) -> ApiResult<ExportedBackup> {
        require_admin(session)?;
        let printers = self.printer_repo.list_all()?;
        let backup = BackupExporter::export(&printers, Utc::now())?;
        info!(user_id = %session.user_id, filename = %backup.filename, "Backup exportado");
        Ok(backup)
    }

    /// Remove todo o inventário e a trilha de auditoria
    ///
    /// Operação destrutiva e irreversível, restrita a admin; a
    /// interface exige confirmação explícita antes de chamar
    #[instrument(skip(self, session))]
    pub fn wipe_inventory(&self, session: &Session) -> ApiResult<WipeSummary> {
        require_admin(session)?;

        let printers_removed = self.printer_repo.delete_all()?;
        let history_removed = self.history_repo.delete_all()?;

        warn!(
            user_id = %session.user_id,
            printers_removed = printers_removed,
            history_removed = history_removed,
            "Inventário zerado"
        );
        Ok(WipeSummary {
            printers_removed,
            history_removed,
        })
    }
}
