// ==========================================
// Testes de integração - Importação de planilhas
// ==========================================
// Cobre: fluxo completo CSV → inventário, descarte de linhas sem
// identificadores, planilha vazia, planilha sem colunas
// reconhecidas e atomicidade do lote
// ==========================================

mod test_helpers;

use inventario_impressoras::domain::printer::{CollectingStatus, InstallMode};
use inventario_impressoras::importer::{
    ImportError, InventoryImporter, InventoryImporterImpl,
};
use inventario_impressoras::repository::PrinterRepository;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::Builder;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn setup_importer() -> (
    tempfile::NamedTempFile,
    InventoryImporterImpl,
    PrinterRepository,
) {
    let (temp_db, db_path) = test_helpers::create_test_db().unwrap();
    let conn = Arc::new(Mutex::new(
        inventario_impressoras::db::open_sqlite_connection(&db_path).unwrap(),
    ));
    let repo = PrinterRepository::new(Arc::clone(&conn));
    let importer = InventoryImporterImpl::new(PrinterRepository::new(conn));
    (temp_db, importer, repo)
}

#[tokio::test]
async fn test_importacao_csv_completa() {
    let (_db, importer, repo) = setup_importer();

    // Cabeçalhos com acentos e apelidos, como nas planilhas reais
    let csv = write_csv(
        "Patrimônio,Serial,Modelo,Conexão,Endereço IP,Status Coleta,Unidade,Logradouro\n\
         0001,BR111,HP M404,Rede,10.0.0.1,Sim,1ºDP,Rua A\n\
         0002,BR222,HP M428,usb,,Não,2ºDP,Rua B\n",
    );

    let summary = importer.import_file(csv.path()).await.unwrap();
    assert_eq!(summary.total_rows, 2);
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.rejected, 0);

    let printers = repo.list_all().unwrap();
    assert_eq!(printers.len(), 2);

    let p1 = printers.iter().find(|p| p.selb == "0001").unwrap();
    assert_eq!(p1.serial_number, "BR111");
    assert_eq!(p1.install_mode, InstallMode::Network);
    assert_eq!(p1.ip, Some("10.0.0.1".to_string()));
    assert_eq!(p1.collecting, CollectingStatus::Yes);
    assert_eq!(p1.station, "1ºDP");

    let p2 = printers.iter().find(|p| p.selb == "0002").unwrap();
    assert_eq!(p2.install_mode, InstallMode::Usb);
    assert_eq!(p2.ip, None);
    assert_eq!(p2.collecting, CollectingStatus::No);
}

#[tokio::test]
async fn test_linha_sem_serie_e_descartada() {
    let (_db, importer, repo) = setup_importer();

    let csv = write_csv(
        "SELB,SÉRIE,MODELO\n\
         0001,BR111,HP M404\n\
         0002,,HP M428\n",
    );

    let summary = importer.import_file(csv.path()).await.unwrap();
    assert_eq!(summary.total_rows, 2);
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(repo.count().unwrap(), 1);
}

#[tokio::test]
async fn test_planilha_vazia_rejeitada() {
    let (_db, importer, repo) = setup_importer();

    let csv = write_csv("SELB,SÉRIE,MODELO\n");

    let result = importer.import_file(csv.path()).await;
    assert!(matches!(result, Err(ImportError::EmptySheet)));
    assert_eq!(repo.count().unwrap(), 0);
}

#[tokio::test]
async fn test_nenhuma_coluna_reconhecida() {
    let (_db, importer, repo) = setup_importer();

    let csv = write_csv(
        "COLUNA_A,COLUNA_B\n\
         x,y\n",
    );

    let result = importer.import_file(csv.path()).await;
    match result {
        Err(ImportError::NoValidRows { headers }) => {
            // A mensagem carrega os cabeçalhos literais do arquivo
            assert!(headers.contains("COLUNA_A"));
            assert!(headers.contains("COLUNA_B"));
        }
        other => panic!("esperava NoValidRows, obteve {other:?}"),
    }
    assert_eq!(repo.count().unwrap(), 0);
}

#[tokio::test]
async fn test_selb_duplicado_desfaz_o_lote_inteiro() {
    let (_db, importer, repo) = setup_importer();

    let csv = write_csv(
        "SELB,SÉRIE\n\
         0001,BR111\n\
         0002,BR222\n\
         0001,BR333\n",
    );

    let result = importer.import_file(csv.path()).await;
    assert!(matches!(
        result,
        Err(ImportError::UniqueConstraintViolation(_))
    ));

    // Transação única: nada do lote pode ter sido gravado
    assert_eq!(repo.count().unwrap(), 0);
}

#[tokio::test]
async fn test_arquivo_inexistente() {
    let (_db, importer, _repo) = setup_importer();
    let result = importer.import_file("nao_existe.csv").await;
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}
