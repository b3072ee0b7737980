// ==========================================
// Inventário de Impressoras - Importador de planilhas
// ==========================================
// Responsabilidade: orquestrar o fluxo de importação
// Fluxo: interpretação → normalização → filtragem → gravação
// ==========================================

use crate::domain::printer::Printer;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_normalizer::FieldNormalizer;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::inventory_importer_trait::{ImportSummary, InventoryImporter};
use crate::repository::printer_repo::PrinterRepository;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// InventoryImporterImpl
// ==========================================
pub struct InventoryImporterImpl {
    printer_repo: PrinterRepository,
    parser: UniversalFileParser,
}

impl InventoryImporterImpl {
    pub fn new(printer_repo: PrinterRepository) -> Self {
        Self {
            printer_repo,
            parser: UniversalFileParser,
        }
    }
}

#[async_trait::async_trait]
impl InventoryImporter for InventoryImporterImpl {
    #[instrument(skip(self, file_path), fields(batch_id))]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportSummary> {
        use std::time::Instant;
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let file_path_str = file_path.as_ref().to_str().unwrap_or("desconhecido");
        info!(batch_id = %batch_id, file_path = %file_path_str, "Iniciando importação de inventário");

        // === Etapa 1: interpretar o arquivo ===
        debug!("Etapa 1: interpretação do arquivo");
        let raw_rows = self.parser.parse(file_path.as_ref())?;
        let total_rows = raw_rows.len();
        info!(total_rows = total_rows, "Arquivo interpretado");

        if raw_rows.is_empty() {
            warn!(batch_id = %batch_id, "Planilha sem linhas de dados");
            return Err(ImportError::EmptySheet);
        }

        // Cabeçalhos literais da planilha, para a mensagem de erro
        // quando nenhuma linha casar com os campos esperados
        let mut detected_headers: Vec<String> = raw_rows[0].keys().cloned().collect();
        detected_headers.sort();

        // === Etapa 2: normalizar e filtrar ===
        debug!("Etapa 2: normalização de cabeçalhos e valores");
        let now = Utc::now();
        let mut printers = Vec::new();
        let mut rejected = 0usize;
        for (idx, row) in raw_rows.iter().enumerate() {
            match FieldNormalizer::normalize_row(row) {
                Some(input) => {
                    printers.push(Printer::from_input(Uuid::new_v4().to_string(), input, now));
                }
                None => {
                    warn!(row_number = idx + 2, "Linha sem SELB ou número de série descartada");
                    rejected += 1;
                }
            }
        }
        info!(
            valid = printers.len(),
            rejected = rejected,
            "Normalização concluída"
        );

        if printers.is_empty() {
            return Err(ImportError::NoValidRows {
                headers: detected_headers.join(", "),
            });
        }

        // === Etapa 3: gravação em lote ===
        debug!("Etapa 3: gravação em transação única");
        let imported = self.printer_repo.batch_insert(&printers)?;

        let elapsed_ms = start_time.elapsed().as_millis();
        info!(
            batch_id = %batch_id,
            imported = imported,
            rejected = rejected,
            elapsed_ms = elapsed_ms,
            "Importação concluída"
        );

        Ok(ImportSummary {
            batch_id,
            total_rows,
            imported,
            rejected,
        })
    }
}
