// ==========================================
// Inventário de Impressoras - API do painel
// ==========================================
// Responsabilidade: agregados de leitura para o painel inicial
// Os agregados são calculados sobre o inventário vivo a cada
// chamada; não há cache nem materialização
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::printer::{CollectingStatus, InstallMode};
use crate::repository::printer_repo::PrinterRepository;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Totais do painel
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub collecting: usize,
    pub not_collecting: usize,
    /// Quantidade de delegacias/unidades distintas
    pub stations: usize,
}

/// Densidade de impressoras por delegacia/unidade
#[derive(Debug, Serialize, PartialEq)]
pub struct StationDensity {
    pub station: String,
    pub total: usize,
    pub collecting: usize,
}

/// Distribuição por modo de instalação e taxa de coleta
#[derive(Debug, Serialize)]
pub struct ConnectivityStats {
    pub network: usize,
    pub usb: usize,
    pub backup: usize,
    /// Percentual de impressoras em coleta, arredondado;
    /// 0 com inventário vazio
    pub collecting_pct: u32,
}

pub struct DashboardApi {
    printer_repo: PrinterRepository,
}

impl DashboardApi {
    pub fn new(printer_repo: PrinterRepository) -> Self {
        Self { printer_repo }
    }

    /// Totais gerais do inventário
    pub fn summary(&self) -> ApiResult<DashboardSummary> {
        let printers = self.printer_repo.list_all()?;

        let collecting = printers
            .iter()
            .filter(|p| p.collecting == CollectingStatus::Yes)
            .count();

        let stations = printers
            .iter()
            .map(|p| p.station.as_str())
            .collect::<HashSet<_>>()
            .len();

        Ok(DashboardSummary {
            total: printers.len(),
            collecting,
            not_collecting: printers.len() - collecting,
            stations,
        })
    }

    /// Contagem por delegacia/unidade, da mais densa para a menos
    ///
    /// Empates são desfeitos por nome, para ordenação estável
    pub fn station_density(&self) -> ApiResult<Vec<StationDensity>> {
        let printers = self.printer_repo.list_all()?;

        let mut buckets: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for printer in &printers {
            let entry = buckets.entry(printer.station.clone()).or_insert((0, 0));
            entry.0 += 1;
            if printer.collecting == CollectingStatus::Yes {
                entry.1 += 1;
            }
        }

        let mut density: Vec<StationDensity> = buckets
            .into_iter()
            .map(|(station, (total, collecting))| StationDensity {
                station,
                total,
                collecting,
            })
            .collect();
        density.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.station.cmp(&b.station)));

        Ok(density)
    }

    /// Distribuição por modo de instalação e taxa de coleta
    pub fn connectivity(&self) -> ApiResult<ConnectivityStats> {
        let printers = self.printer_repo.list_all()?;

        let mut network = 0usize;
        let mut usb = 0usize;
        let mut backup = 0usize;
        let mut collecting = 0usize;
        for printer in &printers {
            match printer.install_mode {
                InstallMode::Network => network += 1,
                InstallMode::Usb => usb += 1,
                InstallMode::Backup => backup += 1,
            }
            if printer.collecting == CollectingStatus::Yes {
                collecting += 1;
            }
        }

        let collecting_pct = if printers.is_empty() {
            0
        } else {
            ((collecting as f64 / printers.len() as f64) * 100.0).round() as u32
        };

        Ok(ConnectivityStats {
            network,
            usb,
            backup,
            collecting_pct,
        })
    }
}
