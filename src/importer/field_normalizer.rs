// ==========================================
// Inventário de Impressoras - Normalizador de campos
// ==========================================
// Responsabilidade: casar cabeçalhos variados de planilhas
// reais com os campos canônicos e coagir os valores
// Regra de casamento: maiúsculas + NFD sem marcas diacríticas,
// então "Nº Série", "SERIE" e "série" casam com o mesmo campo
// ==========================================

use crate::domain::printer::{CollectingStatus, InstallMode, PrinterInput};
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ==========================================
// Tabelas de apelidos (formas já normalizadas)
// ==========================================
const SELB_ALIASES: &[&str] = &["SELB", "PATRIMONIO"];
const SERIAL_ALIASES: &[&str] = &["SERIE", "SERIAL", "NUMERO DE SERIE", "N/S"];
const MODEL_ALIASES: &[&str] = &["MODELO", "EQUIPAMENTO"];
const INSTALL_ALIASES: &[&str] = &["MODO DE INSTALACAO", "INSTALACAO", "CONEXAO"];
const IP_ALIASES: &[&str] = &["IP", "ENDERECO IP"];
const COLLECTING_ALIASES: &[&str] = &["STATUS COLETA", "COLETA", "STATUS"];
const STATION_ALIASES: &[&str] = &["DELEGACIA", "UNIDADE", "DELEGACIA / UNIDADE", "LOCAL", "POSTO"];
const ADDRESS_ALIASES: &[&str] = &["ENDERECO", "LOGRADOURO"];

/// Normaliza um cabeçalho para comparação: trim, maiúsculas e
/// remoção de marcas diacríticas via decomposição NFD
pub fn normalize_header(header: &str) -> String {
    header
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Coage o texto livre da planilha para o modo de instalação
///
/// A ordem das verificações importa: "BACKUP USB" conta como USB
pub fn coerce_install_mode(value: &str) -> InstallMode {
    let normalized = normalize_header(value);
    if normalized.contains("USB") {
        InstallMode::Usb
    } else if normalized.contains("BACKUP") {
        InstallMode::Backup
    } else if normalized.contains("REDE") || normalized.contains("NETWORK") {
        InstallMode::Network
    } else {
        InstallMode::Network
    }
}

/// Coage o texto livre da planilha para o status de coleta
///
/// Apenas as negações explícitas viram Não; qualquer outra
/// coisa (inclusive vazio) assume Sim
pub fn coerce_collecting(value: &str) -> CollectingStatus {
    let normalized = normalize_header(value);
    match normalized.as_str() {
        "NAO" | "NO" | "FALSE" | "0" | "N" => CollectingStatus::No,
        "SIM" | "SI" | "YES" | "TRUE" | "1" | "S" => CollectingStatus::Yes,
        _ => CollectingStatus::Yes,
    }
}

pub struct FieldNormalizer;

impl FieldNormalizer {
    /// Normaliza um registro bruto da planilha
    ///
    /// # Retorno
    /// - Some(PrinterInput): linha aproveitável
    /// - None: linha sem SELB ou sem número de série (descartada)
    pub fn normalize_row(row: &HashMap<String, String>) -> Option<PrinterInput> {
        // Reindexa a linha pelos cabeçalhos normalizados
        let normalized: HashMap<String, &str> = row
            .iter()
            .map(|(k, v)| (normalize_header(k), v.as_str()))
            .collect();

        let lookup = |aliases: &[&str]| -> String {
            for alias in aliases {
                if let Some(value) = normalized.get(*alias) {
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        return trimmed.to_string();
                    }
                }
            }
            String::new()
        };

        let selb = lookup(SELB_ALIASES);
        let serial_number = lookup(SERIAL_ALIASES);

        // Sem identificadores a linha não entra no inventário
        if selb.is_empty() || serial_number.is_empty() {
            return None;
        }

        let ip_raw = lookup(IP_ALIASES);

        Some(PrinterInput {
            selb,
            serial_number,
            model: lookup(MODEL_ALIASES),
            install_mode: coerce_install_mode(&lookup(INSTALL_ALIASES)),
            ip: if ip_raw.is_empty() { None } else { Some(ip_raw) },
            collecting: coerce_collecting(&lookup(COLLECTING_ALIASES)),
            station: lookup(STATION_ALIASES),
            address: lookup(ADDRESS_ALIASES),
        })
    }
}
