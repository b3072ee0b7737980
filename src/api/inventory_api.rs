// ==========================================
// Inventário de Impressoras - API do inventário
// ==========================================
// Responsabilidade: CRUD do inventário com validação de entrada,
// controle de permissão e trilha de auditoria nas edições
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::permission::require_admin;
use crate::audit::ChangeSetDiffer;
use crate::auth::Session;
use crate::domain::history::HistoryEntry;
use crate::domain::printer::{InstallMode, Printer, PrinterInput};
use crate::repository::history_repo::HistoryRepository;
use crate::repository::printer_repo::PrinterRepository;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct InventoryApi {
    printer_repo: PrinterRepository,
    history_repo: HistoryRepository,
}

impl InventoryApi {
    pub fn new(printer_repo: PrinterRepository, history_repo: HistoryRepository) -> Self {
        Self {
            printer_repo,
            history_repo,
        }
    }

    // ==========================================
    // Leitura (aberta a qualquer sessão)
    // ==========================================

    /// Lista o inventário completo, mais recentes primeiro
    pub fn list_printers(&self) -> ApiResult<Vec<Printer>> {
        Ok(self.printer_repo.list_all()?)
    }

    /// Busca uma impressora por id
    pub fn get_printer(&self, id: &str) -> ApiResult<Printer> {
        self.printer_repo
            .find_by_id(id)?
            .ok_or_else(|| ApiError::NotFound {
                entity: "Printer".to_string(),
                id: id.to_string(),
            })
    }

    /// Trilha de auditoria completa, mais recente primeiro
    pub fn list_history(&self) -> ApiResult<Vec<HistoryEntry>> {
        Ok(self.history_repo.list_all()?)
    }

    /// Trilha de auditoria de uma impressora
    pub fn list_printer_history(&self, printer_id: &str) -> ApiResult<Vec<HistoryEntry>> {
        Ok(self.history_repo.list_by_printer(printer_id)?)
    }

    // ==========================================
    // Escrita (restrita a admin)
    // ==========================================

    /// Cadastra uma impressora
    #[instrument(skip(self, session, input), fields(selb = %input.selb))]
    pub fn create_printer(&self, session: &Session, input: PrinterInput) -> ApiResult<Printer> {
        require_admin(session)?;
        validate_input(&input)?;

        let printer = Printer::from_input(Uuid::new_v4().to_string(), input, Utc::now());
        self.printer_repo.insert(&printer)?;

        info!(printer_id = %printer.id, selb = %printer.selb, user_id = %session.user_id, "Impressora cadastrada");
        Ok(printer)
    }

    /// Edita os campos mutáveis de uma impressora
    ///
    /// SELB e número de série são imutáveis: a tentativa de
    /// alterá-los é rejeitada antes de tocar o banco. Cada campo
    /// efetivamente alterado gera um registro de auditoria, todos
    /// com o mesmo timestamp da edição
    #[instrument(skip(self, session, input), fields(printer_id = %id))]
    pub fn update_printer(
        &self,
        session: &Session,
        id: &str,
        input: PrinterInput,
    ) -> ApiResult<Printer> {
        require_admin(session)?;
        validate_input(&input)?;

        let existing = self.get_printer(id)?;

        if input.selb != existing.selb {
            return Err(ApiError::ValidationError(
                "SELB não pode ser alterado após o cadastro".to_string(),
            ));
        }
        if input.serial_number != existing.serial_number {
            return Err(ApiError::ValidationError(
                "número de série não pode ser alterado após o cadastro".to_string(),
            ));
        }

        let now = Utc::now();
        let entries = ChangeSetDiffer::diff(&existing, &input, &session.user_id, now);

        // Edição sem mudança efetiva não toca o banco nem a trilha
        if entries.is_empty() {
            return Ok(existing);
        }

        let updated = Printer {
            id: existing.id.clone(),
            selb: existing.selb.clone(),
            serial_number: existing.serial_number.clone(),
            model: input.model,
            install_mode: input.install_mode,
            ip: input.ip,
            collecting: input.collecting,
            station: input.station,
            address: input.address,
            created_at: existing.created_at,
            updated_at: now,
        };

        self.printer_repo.update_by_id(&updated)?;
        self.history_repo.batch_insert(&entries)?;

        info!(
            printer_id = %updated.id,
            changes = entries.len(),
            user_id = %session.user_id,
            "Impressora editada"
        );
        Ok(updated)
    }

    /// Remove uma impressora
    ///
    /// A trilha de auditoria da impressora é preservada: os
    /// registros seguem consultáveis pela trilha completa
    #[instrument(skip(self, session), fields(printer_id = %id))]
    pub fn delete_printer(&self, session: &Session, id: &str) -> ApiResult<()> {
        require_admin(session)?;
        self.printer_repo.delete_by_id(id)?;
        info!(printer_id = %id, user_id = %session.user_id, "Impressora removida");
        Ok(())
    }
}

/// Valida os campos do formulário
///
/// IP é obrigatório apenas no modo Rede; nos demais modos um IP
/// informado é aceito e preservado
fn validate_input(input: &PrinterInput) -> ApiResult<()> {
    if input.selb.trim().is_empty() {
        return Err(ApiError::InvalidInput("SELB é obrigatório".to_string()));
    }
    if input.serial_number.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "número de série é obrigatório".to_string(),
        ));
    }
    if input.station.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "delegacia/unidade é obrigatória".to_string(),
        ));
    }
    if input.install_mode == InstallMode::Network
        && input.ip.as_deref().map(str::trim).unwrap_or("").is_empty()
    {
        return Err(ApiError::InvalidInput(
            "IP é obrigatório no modo Rede".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::printer::CollectingStatus;

    fn base_input() -> PrinterInput {
        PrinterInput {
            selb: "0001".to_string(),
            serial_number: "BR123".to_string(),
            model: "HP M404".to_string(),
            install_mode: InstallMode::Network,
            ip: Some("10.0.0.1".to_string()),
            collecting: CollectingStatus::Yes,
            station: "1ºDP".to_string(),
            address: "Rua X".to_string(),
        }
    }

    #[test]
    fn test_validate_input_completo_passa() {
        assert!(validate_input(&base_input()).is_ok());
    }

    #[test]
    fn test_validate_rede_sem_ip_rejeitado() {
        let mut input = base_input();
        input.ip = None;
        assert!(matches!(
            validate_input(&input),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_usb_sem_ip_passa() {
        let mut input = base_input();
        input.install_mode = InstallMode::Usb;
        input.ip = None;
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_validate_selb_vazio_rejeitado() {
        let mut input = base_input();
        input.selb = "  ".to_string();
        assert!(matches!(
            validate_input(&input),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
