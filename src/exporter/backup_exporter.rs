// ==========================================
// Inventário de Impressoras - Exportador de backup
// ==========================================
// Responsabilidade: materializar o inventário completo em uma
// planilha .xlsx com os cabeçalhos fixos do formato de backup
// A planilha gerada reimporta sem perdas: os cabeçalhos de
// exportação são apelidos reconhecidos pelo normalizador
// ==========================================

use crate::domain::printer::Printer;
use crate::exporter::error::{ExportError, ExportResult};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::Workbook;
use tracing::{debug, info, instrument};

/// Nome da aba do arquivo de backup
pub const SHEET_NAME: &str = "Inventário";

/// Cabeçalhos do backup, em ordem fixa de colunas
pub const EXPORT_HEADERS: [&str; 9] = [
    "SELB",
    "SÉRIE",
    "MODELO",
    "MODO DE INSTALAÇÃO",
    "IP",
    "STATUS COLETA",
    "DELEGACIA / UNIDADE",
    "ENDEREÇO",
    "DATA DE CADASTRO",
];

/// Resultado da exportação: nome sugerido e bytes do .xlsx
pub struct ExportedBackup {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct BackupExporter;

impl BackupExporter {
    /// Nome do arquivo de backup para uma data de geração
    pub fn backup_filename(generated_at: DateTime<Utc>) -> String {
        format!("Backup_Inventario_{}.xlsx", generated_at.format("%Y-%m-%d"))
    }

    /// Gera o arquivo de backup em memória
    ///
    /// # Retorno
    /// - Ok(ExportedBackup): planilha pronta para download
    /// - Err(EmptyInventory): inventário vazio não gera arquivo
    #[instrument(skip(printers))]
    pub fn export(printers: &[Printer], generated_at: DateTime<Utc>) -> ExportResult<ExportedBackup> {
        if printers.is_empty() {
            return Err(ExportError::EmptyInventory);
        }

        info!(count = printers.len(), "Gerando planilha de backup");

        // Projeta cada impressora nas colunas do backup
        let rows: Vec<[String; 9]> = printers.iter().map(project_row).collect();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col as u16, value)?;
            }
        }

        // Largura de coluna: maior conteúdo (cabeçalho incluso) + 2
        for col in 0..EXPORT_HEADERS.len() {
            let mut width = EXPORT_HEADERS[col].chars().count();
            for row in &rows {
                width = width.max(row[col].chars().count());
            }
            worksheet.set_column_width(col as u16, (width + 2) as f64)?;
        }

        let bytes = workbook.save_to_buffer()?;
        let filename = Self::backup_filename(generated_at);
        debug!(filename = %filename, size = bytes.len(), "Planilha de backup montada");

        Ok(ExportedBackup { filename, bytes })
    }
}

/// Projeta uma impressora na linha do backup
fn project_row(printer: &Printer) -> [String; 9] {
    [
        printer.selb.clone(),
        printer.serial_number.clone(),
        printer.model.clone(),
        printer.install_mode.as_str().to_string(),
        printer.ip.clone().unwrap_or_default(),
        printer.collecting.as_str().to_string(),
        printer.station.clone(),
        printer.address.clone(),
        printer.created_at.format("%d/%m/%Y").to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::printer::{CollectingStatus, InstallMode};
    use chrono::TimeZone;

    fn sample_printer() -> Printer {
        let ts = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        Printer {
            id: "p1".to_string(),
            selb: "0001".to_string(),
            serial_number: "BR123".to_string(),
            model: "HP M404".to_string(),
            install_mode: InstallMode::Network,
            ip: Some("10.0.0.1".to_string()),
            collecting: CollectingStatus::Yes,
            station: "1ºDP".to_string(),
            address: "Rua X, 100".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_inventario_vazio_nao_exporta() {
        let result = BackupExporter::export(&[], Utc::now());
        assert!(matches!(result, Err(ExportError::EmptyInventory)));
    }

    #[test]
    fn test_nome_do_arquivo_carrega_a_data() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(
            BackupExporter::backup_filename(ts),
            "Backup_Inventario_2026-03-15.xlsx"
        );
    }

    #[test]
    fn test_exportacao_gera_bytes_xlsx() {
        let backup = BackupExporter::export(&[sample_printer()], Utc::now()).unwrap();
        assert!(!backup.bytes.is_empty());
        // Assinatura ZIP do container xlsx
        assert_eq!(&backup.bytes[0..2], b"PK");
    }

    #[test]
    fn test_projecao_de_linha() {
        let row = project_row(&sample_printer());
        assert_eq!(row[0], "0001");
        assert_eq!(row[1], "BR123");
        assert_eq!(row[3], "Rede");
        assert_eq!(row[4], "10.0.0.1");
        assert_eq!(row[5], "Sim");
        assert_eq!(row[8], "15/03/2026");
    }

    #[test]
    fn test_projecao_ip_ausente_vira_vazio() {
        let mut printer = sample_printer();
        printer.ip = None;
        let row = project_row(&printer);
        assert_eq!(row[4], "");
    }
}
