// ==========================================
// Testes de integração - API do inventário
// ==========================================
// Cobre: CRUD com controle de permissão, imutabilidade de SELB e
// número de série, trilha de auditoria por campo alterado
// ==========================================

mod test_helpers;

use inventario_impressoras::api::ApiError;
use inventario_impressoras::domain::printer::{CollectingStatus, InstallMode};
use test_helpers::{admin_session, sample_input, setup_state, user_session};

#[test]
fn test_cadastro_e_listagem() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();
    assert_eq!(created.selb, "0001");
    assert_eq!(created.created_at, created.updated_at);

    let printers = state.inventory_api.list_printers().unwrap();
    assert_eq!(printers.len(), 1);
    assert_eq!(printers[0].id, created.id);
}

#[test]
fn test_usuario_comum_nao_cadastra() {
    let (_db, state) = setup_state();
    let user = user_session(&state);

    let result = state
        .inventory_api
        .create_printer(&user, sample_input("0001"));
    assert!(matches!(result, Err(ApiError::PermissionDenied(_))));
}

#[test]
fn test_selb_duplicado_rejeitado() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let mut segunda = sample_input("0001");
    segunda.serial_number = "SN-OUTRO".to_string();
    let result = state.inventory_api.create_printer(&admin, segunda);
    assert!(matches!(result, Err(ApiError::DuplicateSelb(_))));
}

#[test]
fn test_rede_exige_ip() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let mut input = sample_input("0001");
    input.install_mode = InstallMode::Network;
    input.ip = None;

    let result = state.inventory_api.create_printer(&admin, input);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_edicao_de_station_gera_um_registro_de_auditoria() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let mut input = sample_input("0001");
    input.station = "2ª Delegacia".to_string();
    let updated = state
        .inventory_api
        .update_printer(&admin, &created.id, input)
        .unwrap();
    assert_eq!(updated.station, "2ª Delegacia");

    let history = state
        .inventory_api
        .list_printer_history(&created.id)
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].field, "station");
    assert_eq!(history[0].old_value, "1ª Delegacia");
    assert_eq!(history[0].new_value, "2ª Delegacia");
    assert_eq!(history[0].changed_by, admin.user_id);
}

#[test]
fn test_edicao_multipla_compartilha_timestamp() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let mut input = sample_input("0001");
    input.model = "HP M428".to_string();
    input.collecting = CollectingStatus::No;
    state
        .inventory_api
        .update_printer(&admin, &created.id, input)
        .unwrap();

    let history = state
        .inventory_api
        .list_printer_history(&created.id)
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].timestamp, history[1].timestamp);
}

#[test]
fn test_edicao_sem_mudanca_nao_gera_auditoria() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let sem_mudanca = state
        .inventory_api
        .update_printer(&admin, &created.id, sample_input("0001"))
        .unwrap();
    assert_eq!(sem_mudanca.updated_at, created.updated_at);

    let history = state
        .inventory_api
        .list_printer_history(&created.id)
        .unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_selb_e_serie_imutaveis() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let mut selb_alterado = sample_input("0001");
    selb_alterado.selb = "9999".to_string();
    assert!(matches!(
        state
            .inventory_api
            .update_printer(&admin, &created.id, selb_alterado),
        Err(ApiError::ValidationError(_))
    ));

    let mut serie_alterada = sample_input("0001");
    serie_alterada.serial_number = "SN-OUTRO".to_string();
    assert!(matches!(
        state
            .inventory_api
            .update_printer(&admin, &created.id, serie_alterada),
        Err(ApiError::ValidationError(_))
    ));
}

#[test]
fn test_exclusao_preserva_a_trilha() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let created = state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();

    let mut input = sample_input("0001");
    input.address = "Av. Central, 55".to_string();
    state
        .inventory_api
        .update_printer(&admin, &created.id, input)
        .unwrap();

    state
        .inventory_api
        .delete_printer(&admin, &created.id)
        .unwrap();
    assert!(state.inventory_api.list_printers().unwrap().is_empty());

    // A trilha da impressora excluída segue consultável
    let history = state
        .inventory_api
        .list_printer_history(&created.id)
        .unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn test_exclusao_de_id_inexistente() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    let result = state.inventory_api.delete_printer(&admin, "nao-existe");
    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
