// ==========================================
// Inventário de Impressoras - Trait de importação
// ==========================================
// Responsabilidade: definir a interface de importação de
// planilhas de inventário (sem implementação)
// ==========================================

use crate::importer::error::ImportResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// ImportSummary - Resultado de uma importação
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Identificador do lote de importação
    pub batch_id: String,
    /// Linhas de dados encontradas no arquivo
    pub total_rows: usize,
    /// Linhas gravadas no inventário
    pub imported: usize,
    /// Linhas descartadas (sem SELB ou sem número de série)
    pub rejected: usize,
}

// ==========================================
// InventoryImporter Trait
// ==========================================
// Implementador: InventoryImporterImpl
#[async_trait]
pub trait InventoryImporter: Send + Sync {
    /// Importa uma planilha de inventário (.xlsx/.xls/.csv)
    ///
    /// # Fluxo (4 etapas)
    /// 1. Leitura e interpretação do arquivo
    /// 2. Normalização de cabeçalhos e valores
    /// 3. Filtragem de linhas sem identificadores
    /// 4. Gravação em lote (transação única)
    ///
    /// # Retorno
    /// - Ok(ImportSummary): contagens do lote
    /// - Err: arquivo ilegível, planilha vazia, nenhuma linha
    ///   válida ou falha do banco (nada é gravado em caso de erro)
    async fn import_file<P: AsRef<Path> + Send>(&self, file_path: P)
        -> ImportResult<ImportSummary>;
}

// ==========================================
// FileParser Trait
// ==========================================
// Implementadores: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// Interpreta o arquivo como registros brutos (HashMap<coluna, valor>)
    ///
    /// Linhas totalmente em branco são descartadas; todos os
    /// valores chegam com trim aplicado
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> ImportResult<Vec<std::collections::HashMap<String, String>>>;
}
