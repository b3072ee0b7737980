// ==========================================
// Auxiliares de teste
// ==========================================
// Responsabilidade: banco temporário, estado montado e sessões
// prontas para os testes de integração
// ==========================================

use inventario_impressoras::app::AppState;
use inventario_impressoras::auth::Session;
use inventario_impressoras::db::{init_schema, open_sqlite_connection};
use inventario_impressoras::domain::printer::{CollectingStatus, InstallMode, PrinterInput};
use inventario_impressoras::domain::user::{NewUser, UserRole};
use rusqlite::Connection;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Cria um banco temporário com o schema inicializado
///
/// # Retorno
/// - NamedTempFile: arquivo temporário (manter vivo durante o teste)
/// - String: caminho do banco
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// Monta o estado completo da aplicação sobre um banco temporário
pub fn setup_state() -> (NamedTempFile, AppState) {
    let (temp_file, db_path) = create_test_db().expect("falha ao criar banco de teste");
    let conn = open_sqlite_connection(&db_path).expect("falha ao abrir banco de teste");
    let state = AppState::new(Arc::new(Mutex::new(conn)));
    (temp_file, state)
}

/// Cadastra e autentica um administrador de teste
pub fn admin_session(state: &AppState) -> Session {
    state
        .auth
        .sign_up(&NewUser {
            username: "admin-teste".to_string(),
            password: "senha-admin".to_string(),
            role: UserRole::Admin,
        })
        .expect("falha ao cadastrar admin de teste");
    state
        .auth
        .sign_in("admin-teste", "senha-admin")
        .expect("falha ao autenticar admin de teste")
}

/// Cadastra e autentica um usuário comum de teste
pub fn user_session(state: &AppState) -> Session {
    state
        .auth
        .sign_up(&NewUser {
            username: "usuario-teste".to_string(),
            password: "senha-usuario".to_string(),
            role: UserRole::User,
        })
        .expect("falha ao cadastrar usuário de teste");
    state
        .auth
        .sign_in("usuario-teste", "senha-usuario")
        .expect("falha ao autenticar usuário de teste")
}

/// Formulário de impressora válido para testes
pub fn sample_input(selb: &str) -> PrinterInput {
    PrinterInput {
        selb: selb.to_string(),
        serial_number: format!("SN-{selb}"),
        model: "HP LaserJet M404".to_string(),
        install_mode: InstallMode::Network,
        ip: Some("10.10.0.1".to_string()),
        collecting: CollectingStatus::Yes,
        station: "1ª Delegacia".to_string(),
        address: "Rua das Flores, 100".to_string(),
    }
}
