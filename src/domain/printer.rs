// ==========================================
// Inventário de Impressoras - Modelo de impressora
// ==========================================
// Alinhado à tabela printers
// Invariantes: selb é único e imutável após o cadastro;
//              serial_number é imutável após o cadastro;
//              ip é obrigatório apenas no modo Rede
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// InstallMode - Modo de instalação
// ==========================================
// Valores canônicos persistidos: "USB" / "Rede" / "Backup"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallMode {
    #[serde(rename = "USB")]
    Usb,
    #[serde(rename = "Rede")]
    Network,
    #[serde(rename = "Backup")]
    Backup,
}

impl InstallMode {
    /// Converte para o rótulo canônico (armazenamento e exibição)
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallMode::Usb => "USB",
            InstallMode::Network => "Rede",
            InstallMode::Backup => "Backup",
        }
    }

    /// Converte do rótulo canônico
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USB" => Some(InstallMode::Usb),
            "Rede" => Some(InstallMode::Network),
            "Backup" => Some(InstallMode::Backup),
            _ => None,
        }
    }
}

impl std::fmt::Display for InstallMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// CollectingStatus - Status de coleta
// ==========================================
// Indica se os dados de uso da impressora estão sendo coletados
// Valores canônicos persistidos: "Sim" / "Não"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectingStatus {
    #[serde(rename = "Sim")]
    Yes,
    #[serde(rename = "Não")]
    No,
}

impl CollectingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectingStatus::Yes => "Sim",
            CollectingStatus::No => "Não",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Sim" => Some(CollectingStatus::Yes),
            "Não" => Some(CollectingStatus::No),
            _ => None,
        }
    }
}

impl std::fmt::Display for CollectingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// Printer - Impressora cadastrada
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    // ===== Identidade =====
    pub id: String, // UUID gerado pelo sistema

    // ===== Patrimônio (imutáveis após o cadastro) =====
    pub selb: String,          // SELB / patrimônio, único
    pub serial_number: String, // número de série

    // ===== Dados do equipamento =====
    pub model: String,
    pub install_mode: InstallMode,
    pub ip: Option<String>, // obrigatório apenas no modo Rede

    // ===== Localização e monitoramento =====
    pub collecting: CollectingStatus,
    pub station: String, // delegacia / unidade
    pub address: String,

    // ===== Carimbos de tempo =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// PrinterInput - Dados de formulário/importação
// ==========================================
// Mesma forma da entidade, menos identidade e carimbos de tempo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterInput {
    pub selb: String,
    pub serial_number: String,
    pub model: String,
    pub install_mode: InstallMode,
    pub ip: Option<String>,
    pub collecting: CollectingStatus,
    pub station: String,
    pub address: String,
}

impl PrinterInput {
    /// Projeta a entidade de volta para a forma de entrada
    /// (usado pelo diff de auditoria e pelos testes)
    pub fn from_printer(p: &Printer) -> Self {
        Self {
            selb: p.selb.clone(),
            serial_number: p.serial_number.clone(),
            model: p.model.clone(),
            install_mode: p.install_mode,
            ip: p.ip.clone(),
            collecting: p.collecting,
            station: p.station.clone(),
            address: p.address.clone(),
        }
    }
}

impl Printer {
    /// Cria uma nova impressora a partir do formulário
    ///
    /// # Parâmetros
    /// - id: UUID gerado pelo chamador
    /// - input: dados validados do formulário
    /// - now: instante do cadastro (created_at = updated_at)
    pub fn from_input(id: String, input: PrinterInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            selb: input.selb,
            serial_number: input.serial_number,
            model: input.model,
            install_mode: input.install_mode,
            ip: input.ip,
            collecting: input.collecting,
            station: input.station,
            address: input.address,
            created_at: now,
            updated_at: now,
        }
    }
}
