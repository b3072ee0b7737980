// ==========================================
// PrinterRepository - Repositório do inventário
// ==========================================
// Responsabilidade: CRUD da tabela printers
// Linha vermelha: sem regra de negócio, só acesso a dados
// ==========================================

use crate::domain::printer::{CollectingStatus, InstallMode, Printer};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct PrinterRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PrinterRepository {
    /// Cria o repositório sobre uma conexão compartilhada
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Obtém a conexão com o banco
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Escrita
    // ==========================================

    /// Insere uma impressora
    pub fn insert(&self, printer: &Printer) -> RepositoryResult<String> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO printers (
                id, selb, serial_number, model, install_mode, ip,
                collecting, station, address, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                printer.id,
                printer.selb,
                printer.serial_number,
                printer.model,
                printer.install_mode.as_str(),
                printer.ip,
                printer.collecting.as_str(),
                printer.station,
                printer.address,
                printer.created_at.to_rfc3339(),
                printer.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(printer.id.clone())
    }

    /// Insere um lote de impressoras em uma única transação
    ///
    /// # Retorno
    /// - Ok(usize): quantidade inserida
    /// - Err: erro do banco (a transação inteira é desfeita;
    ///   o chamador assume que nada foi gravado)
    pub fn batch_insert(&self, printers: &[Printer]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for printer in printers {
            tx.execute(
                r#"
                INSERT INTO printers (
                    id, selb, serial_number, model, install_mode, ip,
                    collecting, station, address, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    printer.id,
                    printer.selb,
                    printer.serial_number,
                    printer.model,
                    printer.install_mode.as_str(),
                    printer.ip,
                    printer.collecting.as_str(),
                    printer.station,
                    printer.address,
                    printer.created_at.to_rfc3339(),
                    printer.updated_at.to_rfc3339(),
                ],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// Atualiza os campos editáveis de uma impressora
    ///
    /// selb e serial_number não aparecem aqui de propósito:
    /// são imutáveis após o cadastro (a API rejeita a tentativa
    /// antes de chegar nesta camada)
    pub fn update_by_id(&self, printer: &Printer) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let rows = conn.execute(
            r#"
            UPDATE printers SET
                model = ?2, install_mode = ?3, ip = ?4,
                collecting = ?5, station = ?6, address = ?7,
                updated_at = ?8
            WHERE id = ?1
            "#,
            params![
                printer.id,
                printer.model,
                printer.install_mode.as_str(),
                printer.ip,
                printer.collecting.as_str(),
                printer.station,
                printer.address,
                printer.updated_at.to_rfc3339(),
            ],
        )?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Printer".to_string(),
                id: printer.id.clone(),
            });
        }
        Ok(())
    }

    /// Remove uma impressora por id
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM printers WHERE id = ?1", params![id])?;
        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Printer".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Remove todo o inventário (wipe administrativo)
    pub fn delete_all(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM printers", [])?;
        Ok(rows)
    }

    // ==========================================
    // Leitura
    // ==========================================

    /// Busca uma impressora por id
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Printer>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, selb, serial_number, model, install_mode, ip,
                   collecting, station, address, created_at, updated_at
            FROM printers
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![id], map_printer_row);

        match result {
            Ok(printer) => Ok(Some(printer)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lista o inventário completo (mais recentes primeiro)
    pub fn list_all(&self) -> RepositoryResult<Vec<Printer>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, selb, serial_number, model, install_mode, ip,
                   collecting, station, address, created_at, updated_at
            FROM printers
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([], map_printer_row)?;
        let mut printers = Vec::new();
        for row in rows {
            printers.push(row?);
        }
        Ok(printers)
    }

    /// Conta os registros do inventário
    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM printers", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Mapeia uma linha da tabela printers para a entidade
fn map_printer_row(row: &Row<'_>) -> rusqlite::Result<Printer> {
    Ok(Printer {
        id: row.get(0)?,
        selb: row.get(1)?,
        serial_number: row.get(2)?,
        model: row.get(3)?,
        install_mode: row
            .get::<_, String>(4)
            .map(|s| InstallMode::from_str(&s).unwrap_or(InstallMode::Network))?,
        ip: row.get(5)?,
        collecting: row
            .get::<_, String>(6)
            .map(|s| CollectingStatus::from_str(&s).unwrap_or(CollectingStatus::Yes))?,
        station: row.get(7)?,
        address: row.get(8)?,
        created_at: row
            .get::<_, String>(9)?
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|_| chrono::Utc::now()),
        updated_at: row
            .get::<_, String>(10)?
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|_| chrono::Utc::now()),
    })
}
