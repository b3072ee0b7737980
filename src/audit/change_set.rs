// ==========================================
// ChangeSetDiffer - Diff de alterações
// ==========================================
// Compara o registro anterior com os valores propostos e emite
// um HistoryEntry por campo que mudou, na ordem fixa da lista
// de campos rastreados.
//
// A igualdade é por coerção para texto: valores de tipos
// diferentes que viram o mesmo texto contam como "sem alteração".
// Isso é uma tolerância intencional do desenho, não um bug; a
// regra de coerção é explícita na projeção de cada campo abaixo.
// ==========================================

use crate::domain::history::HistoryEntry;
use crate::domain::printer::{Printer, PrinterInput};
use chrono::{DateTime, Utc};

/// Projeção de um campo rastreado para texto
type FieldProjection = fn(&PrinterInput) -> String;

/// Campos rastreados, em ordem fixa, com a coerção de cada um.
/// Os nomes são os exibidos na trilha de auditoria.
pub const TRACKED_FIELDS: [(&str, FieldProjection); 8] = [
    ("selb", |p| p.selb.clone()),
    ("serialNumber", |p| p.serial_number.clone()),
    ("model", |p| p.model.clone()),
    ("installMode", |p| p.install_mode.as_str().to_string()),
    ("ip", |p| p.ip.clone().unwrap_or_default()),
    ("collecting", |p| p.collecting.as_str().to_string()),
    ("station", |p| p.station.clone()),
    ("address", |p| p.address.clone()),
];

pub struct ChangeSetDiffer;

impl ChangeSetDiffer {
    /// Compara o estado anterior com os valores propostos
    ///
    /// # Parâmetros
    /// - old: registro persistido antes da edição
    /// - new: valores propostos (forma de formulário)
    /// - changed_by: id do usuário atuante
    /// - now: instante da edição (compartilhado pelos registros)
    ///
    /// # Retorno
    /// Um HistoryEntry por campo cujo texto coagido difere;
    /// campos inalterados não geram registro
    pub fn diff(
        old: &Printer,
        new: &PrinterInput,
        changed_by: &str,
        now: DateTime<Utc>,
    ) -> Vec<HistoryEntry> {
        let old_input = PrinterInput::from_printer(old);

        let mut entries = Vec::new();
        for (field, project) in TRACKED_FIELDS {
            let old_value = project(&old_input);
            let new_value = project(new);

            if old_value != new_value {
                entries.push(HistoryEntry::new(
                    &old.id, field, old_value, new_value, changed_by, now,
                ));
            }
        }
        entries
    }
}
