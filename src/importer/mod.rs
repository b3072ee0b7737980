// ==========================================
// Inventário de Impressoras - Módulo de importação
// ==========================================
// Responsabilidade: transformar planilhas reais (cabeçalhos
// variados, acentuação inconsistente) em registros do inventário
// ==========================================

pub mod error;
pub mod field_normalizer;
pub mod file_parser;
pub mod inventory_importer_impl;
pub mod inventory_importer_trait;

pub use error::{ImportError, ImportResult};
pub use field_normalizer::FieldNormalizer;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use inventory_importer_impl::InventoryImporterImpl;
pub use inventory_importer_trait::{FileParser, ImportSummary, InventoryImporter};
