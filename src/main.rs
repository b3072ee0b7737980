// ==========================================
// Inventário de Impressoras - Entrada principal
// ==========================================
// Stack: Rust + SQLite
// Posicionamento: backend do painel de gestão do parque de
// impressoras (delegacias/unidades)
// ==========================================

use inventario_impressoras::app::AppState;
use inventario_impressoras::auth::error::AuthError;
use inventario_impressoras::config::AppConfig;
use inventario_impressoras::db::open_and_init;
use inventario_impressoras::domain::user::{NewUser, UserRole};
use inventario_impressoras::{i18n, logging};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", inventario_impressoras::APP_NAME);
    tracing::info!("Versão do sistema: {}", inventario_impressoras::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env();
    i18n::set_locale(&config.locale);
    tracing::info!("Usando banco de dados: {}", config.db_path);

    let conn = open_and_init(&config.db_path)?;
    let state = AppState::new(Arc::new(Mutex::new(conn)));

    bootstrap_admin(&state)?;

    // Resumo de inicialização para diagnóstico
    let summary = state.dashboard_api.summary()?;
    tracing::info!(
        total = summary.total,
        collecting = summary.collecting,
        stations = summary.stations,
        "Inventário carregado"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Garante o administrador inicial na primeira execução
///
/// A senha vem de INVENTARIO_ADMIN_SENHA; sem a variável, uma
/// senha aleatória é gerada e registrada no log uma única vez
fn bootstrap_admin(state: &AppState) -> anyhow::Result<()> {
    let generated;
    let password = match std::env::var("INVENTARIO_ADMIN_SENHA") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            generated = Uuid::new_v4().to_string();
            generated
        }
    };

    match state.auth.sign_up(&NewUser {
        username: "admin".to_string(),
        password: password.clone(),
        role: UserRole::Admin,
    }) {
        Ok(profile) => {
            tracing::warn!(
                user_id = %profile.id,
                "Administrador inicial criado; senha provisória: {}",
                password
            );
            Ok(())
        }
        Err(AuthError::UsernameTaken(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
