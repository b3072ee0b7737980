// ==========================================
// Testes de integração - API do painel
// ==========================================
// Cobre: totais, densidade por unidade (ordenada) e
// distribuição por modo de instalação
// ==========================================

mod test_helpers;

use inventario_impressoras::domain::printer::{CollectingStatus, InstallMode};
use test_helpers::{admin_session, sample_input, setup_state};

#[test]
fn test_painel_com_inventario_vazio() {
    let (_db, state) = setup_state();

    let summary = state.dashboard_api.summary().unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.stations, 0);

    let connectivity = state.dashboard_api.connectivity().unwrap();
    assert_eq!(connectivity.collecting_pct, 0);

    assert!(state.dashboard_api.station_density().unwrap().is_empty());
}

#[test]
fn test_totais_e_densidade() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    // 2 na 1ª Delegacia, 1 na 2ª
    for (selb, station) in [
        ("0001", "1ª Delegacia"),
        ("0002", "1ª Delegacia"),
        ("0003", "2ª Delegacia"),
    ] {
        let mut input = sample_input(selb);
        input.station = station.to_string();
        if selb == "0003" {
            input.collecting = CollectingStatus::No;
        }
        state.inventory_api.create_printer(&admin, input).unwrap();
    }

    let summary = state.dashboard_api.summary().unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.collecting, 2);
    assert_eq!(summary.not_collecting, 1);
    assert_eq!(summary.stations, 2);

    let density = state.dashboard_api.station_density().unwrap();
    assert_eq!(density.len(), 2);
    assert_eq!(density[0].station, "1ª Delegacia");
    assert_eq!(density[0].total, 2);
    assert_eq!(density[0].collecting, 2);
    assert_eq!(density[1].station, "2ª Delegacia");
    assert_eq!(density[1].total, 1);
    assert_eq!(density[1].collecting, 0);
}

#[test]
fn test_distribuicao_por_modo_de_instalacao() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    // 2 em rede coletando, 1 USB sem coleta
    for (selb, mode) in [
        ("0001", InstallMode::Network),
        ("0002", InstallMode::Network),
        ("0003", InstallMode::Usb),
    ] {
        let mut input = sample_input(selb);
        input.install_mode = mode;
        if mode != InstallMode::Network {
            input.ip = None;
            input.collecting = CollectingStatus::No;
        }
        state.inventory_api.create_printer(&admin, input).unwrap();
    }

    let connectivity = state.dashboard_api.connectivity().unwrap();
    assert_eq!(connectivity.network, 2);
    assert_eq!(connectivity.usb, 1);
    assert_eq!(connectivity.backup, 0);
    // 2/3 arredonda para 67
    assert_eq!(connectivity.collecting_pct, 67);
}

#[test]
fn test_snapshot_de_visualizacao() {
    let (_db, state) = setup_state();
    let admin = admin_session(&state);

    state
        .inventory_api
        .create_printer(&admin, sample_input("0001"))
        .unwrap();
    state.refresh_store(&admin).unwrap();

    let snapshot = state.store.snapshot().unwrap();
    assert_eq!(snapshot.printers.len(), 1);
    assert_eq!(snapshot.users.len(), 1); // o próprio admin

    state.store.clear().unwrap();
    assert!(state.store.snapshot().unwrap().printers.is_empty());
}
