// ==========================================
// Inventário de Impressoras - Snapshot de sessão de visualização
// ==========================================
// Responsabilidade: manter a cópia em memória que a interface
// exibe. A atualização é sempre por substituição integral do
// snapshot, nunca por emenda parcial: depois de qualquer mutação
// o chamador recarrega as listas inteiras do banco
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::history::HistoryEntry;
use crate::domain::printer::Printer;
use crate::domain::user::UserProfile;
use std::sync::RwLock;

/// Estado exibido pela interface
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub printers: Vec<Printer>,
    pub history: Vec<HistoryEntry>,
    pub users: Vec<UserProfile>,
}

#[derive(Default)]
pub struct SessionStore {
    snapshot: RwLock<ViewSnapshot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cópia do snapshot atual
    pub fn snapshot(&self) -> ApiResult<ViewSnapshot> {
        let guard = self
            .snapshot
            .read()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// Substitui a lista de impressoras
    pub fn replace_printers(&self, printers: Vec<Printer>) -> ApiResult<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        guard.printers = printers;
        Ok(())
    }

    /// Substitui a trilha de auditoria
    pub fn replace_history(&self, history: Vec<HistoryEntry>) -> ApiResult<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        guard.history = history;
        Ok(())
    }

    /// Substitui a lista de usuários
    pub fn replace_users(&self, users: Vec<UserProfile>) -> ApiResult<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        guard.users = users;
        Ok(())
    }

    /// Descarta o snapshot (logout)
    pub fn clear(&self) -> ApiResult<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| ApiError::InternalError(e.to_string()))?;
        *guard = ViewSnapshot::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::printer::{CollectingStatus, InstallMode, PrinterInput};
    use chrono::Utc;

    fn printer(selb: &str) -> Printer {
        Printer::from_input(
            format!("id-{selb}"),
            PrinterInput {
                selb: selb.to_string(),
                serial_number: format!("SN-{selb}"),
                model: "HP M404".to_string(),
                install_mode: InstallMode::Usb,
                ip: None,
                collecting: CollectingStatus::Yes,
                station: "1ºDP".to_string(),
                address: "Rua X".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_substituicao_integral() {
        let store = SessionStore::new();
        store
            .replace_printers(vec![printer("0001"), printer("0002")])
            .unwrap();
        assert_eq!(store.snapshot().unwrap().printers.len(), 2);

        // A substituição descarta o conteúdo anterior
        store.replace_printers(vec![printer("0003")]).unwrap();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.printers.len(), 1);
        assert_eq!(snapshot.printers[0].selb, "0003");
    }

    #[test]
    fn test_clear_zera_tudo() {
        let store = SessionStore::new();
        store.replace_printers(vec![printer("0001")]).unwrap();
        store.clear().unwrap();
        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.printers.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.users.is_empty());
    }
}
