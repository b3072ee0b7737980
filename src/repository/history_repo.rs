// ==========================================
// HistoryRepository - Repositório da trilha de auditoria
// ==========================================
// Linha vermelha: append-only; nenhuma atualização ou remoção
// individual, só o wipe administrativo limpa a tabela
// ==========================================

use crate::domain::history::HistoryEntry;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct HistoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HistoryRepository {
    /// Cria o repositório sobre uma conexão compartilhada
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Escrita
    // ==========================================

    /// Insere um lote de registros de alteração em uma transação
    ///
    /// Os registros de uma mesma edição não carregam identidade de
    /// lote: são gravados juntos e a ordenação de exibição é feita
    /// por timestamp decrescente na leitura
    pub fn batch_insert(&self, entries: &[HistoryEntry]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for entry in entries {
            tx.execute(
                r#"
                INSERT INTO history (
                    id, printer_id, field, old_value, new_value,
                    changed_by, timestamp
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    entry.id,
                    entry.printer_id,
                    entry.field,
                    entry.old_value,
                    entry.new_value,
                    entry.changed_by,
                    entry.timestamp.to_rfc3339(),
                ],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// Remove toda a trilha de auditoria (wipe administrativo)
    pub fn delete_all(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM history", [])?;
        Ok(rows)
    }

    // ==========================================
    // Leitura
    // ==========================================

    /// Lista a trilha completa, mais recente primeiro
    pub fn list_all(&self) -> RepositoryResult<Vec<HistoryEntry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, printer_id, field, old_value, new_value,
                   changed_by, timestamp
            FROM history
            ORDER BY timestamp DESC
            "#,
        )?;

        let rows = stmt.query_map([], map_history_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Lista as alterações de uma impressora, mais recente primeiro
    pub fn list_by_printer(&self, printer_id: &str) -> RepositoryResult<Vec<HistoryEntry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, printer_id, field, old_value, new_value,
                   changed_by, timestamp
            FROM history
            WHERE printer_id = ?1
            ORDER BY timestamp DESC
            "#,
        )?;

        let rows = stmt.query_map(params![printer_id], map_history_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

/// Mapeia uma linha da tabela history para a entidade
fn map_history_row(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get(0)?,
        printer_id: row.get(1)?,
        field: row.get(2)?,
        old_value: row.get(3)?,
        new_value: row.get(4)?,
        changed_by: row.get(5)?,
        timestamp: row
            .get::<_, String>(6)?
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|_| chrono::Utc::now()),
    })
}
