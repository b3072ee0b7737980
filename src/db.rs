// ==========================================
// Inventário de Impressoras - Inicialização SQLite
// ==========================================
// Objetivos:
// - Unificar o comportamento de PRAGMA em todas as conexões
//   (chaves estrangeiras ligadas em todas, sem exceção)
// - Unificar busy_timeout para reduzir erros esporádicos de busy
// - Criar o schema na primeira execução
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// busy_timeout padrão (milissegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configura os PRAGMAs unificados da conexão SQLite
///
/// Observação:
/// - foreign_keys precisa ser ligado por conexão
/// - busy_timeout precisa ser configurado por conexão
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre uma conexão SQLite com a configuração unificada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Cria as tabelas do sistema se ainda não existirem
///
/// Tabelas:
/// - printers: inventário de impressoras (selb único)
/// - history: trilha de auditoria (append-only, só removida no wipe)
/// - profiles: perfis de acesso (hash de senha nunca exposto em leitura)
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS printers (
            id            TEXT PRIMARY KEY,
            selb          TEXT NOT NULL UNIQUE,
            serial_number TEXT NOT NULL,
            model         TEXT NOT NULL DEFAULT '',
            install_mode  TEXT NOT NULL,
            ip            TEXT,
            collecting    TEXT NOT NULL,
            station       TEXT NOT NULL DEFAULT '',
            address       TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        -- history referencia printers apenas logicamente: a entrada
        -- sobrevive à exclusão da impressora (exibição cai para "Excluída")
        CREATE TABLE IF NOT EXISTS history (
            id          TEXT PRIMARY KEY,
            printer_id  TEXT NOT NULL,
            field       TEXT NOT NULL,
            old_value   TEXT NOT NULL,
            new_value   TEXT NOT NULL,
            changed_by  TEXT NOT NULL,
            timestamp   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS profiles (
            id            TEXT PRIMARY KEY,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role          TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        -- history é consultada sempre por janela de tempo decrescente
        CREATE INDEX IF NOT EXISTS idx_history_ts ON history(timestamp);
        CREATE INDEX IF NOT EXISTS idx_history_printer_ts ON history(printer_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_printers_created ON printers(created_at);
        "#,
    )?;
    Ok(())
}

/// Abre a conexão e garante o schema em um passo só
pub fn open_and_init(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_idempotente() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        // Segunda chamada não pode falhar
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('printers','history','profiles')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }
}
