// ==========================================
// Inventário de Impressoras - Estado global da aplicação
// ==========================================
// Responsabilidade: montar repositórios, serviços e APIs sobre a
// conexão compartilhada e expor o conjunto para a interface
// ==========================================

use crate::api::backup_api::BackupApi;
use crate::api::dashboard_api::DashboardApi;
use crate::api::error::ApiResult;
use crate::api::inventory_api::InventoryApi;
use crate::api::user_api::UserApi;
use crate::app::session::SessionStore;
use crate::auth::service::AuthService;
use crate::auth::Session;
use crate::importer::inventory_importer_impl::InventoryImporterImpl;
use crate::repository::history_repo::HistoryRepository;
use crate::repository::printer_repo::PrinterRepository;
use crate::repository::profile_repo::ProfileRepository;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::info;

pub struct AppState {
    pub conn: Arc<Mutex<Connection>>,
    pub auth: Arc<AuthService>,
    pub inventory_api: InventoryApi,
    pub backup_api: BackupApi,
    pub user_api: UserApi,
    pub dashboard_api: DashboardApi,
    pub store: SessionStore,
}

impl AppState {
    /// Monta o estado completo sobre uma conexão já inicializada
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        let auth = Arc::new(AuthService::new(ProfileRepository::new(Arc::clone(&conn))));

        let inventory_api = InventoryApi::new(
            PrinterRepository::new(Arc::clone(&conn)),
            HistoryRepository::new(Arc::clone(&conn)),
        );

        let importer = InventoryImporterImpl::new(PrinterRepository::new(Arc::clone(&conn)));
        let backup_api = BackupApi::new(
            PrinterRepository::new(Arc::clone(&conn)),
            HistoryRepository::new(Arc::clone(&conn)),
            importer,
        );

        let user_api = UserApi::new(ProfileRepository::new(Arc::clone(&conn)), Arc::clone(&auth));
        let dashboard_api = DashboardApi::new(PrinterRepository::new(Arc::clone(&conn)));

        info!("Estado da aplicação montado");

        Self {
            conn,
            auth,
            inventory_api,
            backup_api,
            user_api,
            dashboard_api,
            store: SessionStore::new(),
        }
    }

    /// Recarrega o snapshot de visualização a partir do banco
    ///
    /// A lista de usuários só é carregada para admin; para os
    /// demais papéis ela fica vazia no snapshot
    pub fn refresh_store(&self, session: &Session) -> ApiResult<()> {
        self.store
            .replace_printers(self.inventory_api.list_printers()?)?;
        self.store
            .replace_history(self.inventory_api.list_history()?)?;

        if session.is_admin() {
            self.store.replace_users(self.user_api.list_users(session)?)?;
        } else {
            self.store.replace_users(Vec::new())?;
        }
        Ok(())
    }
}
