// ==========================================
// Inventário de Impressoras - Trilha de auditoria
// ==========================================
// Linha vermelha: toda edição de campo gera registro
// Uso: auditoria de alterações do inventário
// Alinhado à tabela history
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// HistoryEntry - Registro de alteração
// ==========================================
// Criado exatamente uma vez por campo alterado por edição.
// Nunca é atualizado nem removido individualmente (apenas o wipe
// administrativo limpa a tabela inteira).
//
// printer_id é referência, não posse: o registro permanece válido
// mesmo depois que a impressora é excluída.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub printer_id: String,
    pub field: String,      // nome do atributo alterado
    pub old_value: String,  // valor anterior (coagido para texto)
    pub new_value: String,  // valor novo (coagido para texto)
    pub changed_by: String, // id do usuário que fez a alteração
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Cria um novo registro de alteração
    ///
    /// # Parâmetros
    /// - printer_id: impressora alterada
    /// - field: nome do campo
    /// - old_value / new_value: valores coagidos para texto
    /// - changed_by: id do usuário atuante
    /// - timestamp: instante da edição (compartilhado entre os
    ///   registros de uma mesma edição)
    pub fn new(
        printer_id: &str,
        field: &str,
        old_value: String,
        new_value: String,
        changed_by: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            printer_id: printer_id.to_string(),
            field: field.to_string(),
            old_value,
            new_value,
            changed_by: changed_by.to_string(),
            timestamp,
        }
    }
}
