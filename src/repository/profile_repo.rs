// ==========================================
// ProfileRepository - Repositório de perfis de acesso
// ==========================================
// Responsabilidade: CRUD da tabela profiles
// O hash de senha só circula dentro desta camada e do serviço
// de autenticação; nenhuma listagem o expõe
// ==========================================

use crate::domain::user::{UserProfile, UserRole};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

/// Linha interna com credencial, restrita à autenticação
pub struct ProfileWithCredential {
    pub profile: UserProfile,
    pub password_hash: String,
}

pub struct ProfileRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProfileRepository {
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

    /// Insere um perfil com a credencial já em hash
    pub fn insert(&self, profile: &UserProfile, password_hash: &str) -> RepositoryResult<String> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO profiles (id, username, password_hash, role, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                profile.id,
                profile.username,
                password_hash,
                profile.role.as_str(),
                profile.created_at.to_rfc3339(),
            ],
        )?;

        Ok(profile.id.clone())
    }

    /// Atualiza nome de usuário e papel
    ///
    /// A credencial não é tocada aqui: redefinição de senha é uma
    /// operação do serviço de autenticação
    pub fn update_by_id(&self, id: &str, username: &str, role: UserRole) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE profiles SET username = ?2, role = ?3 WHERE id = ?1",
            params![id, username, role.as_str()],
        )?;
        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "UserProfile".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Redefine o hash de senha de um perfil
    pub fn update_password_hash(&self, id: &str, password_hash: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE profiles SET password_hash = ?2 WHERE id = ?1",
            params![id, password_hash],
        )?;
        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "UserProfile".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Remove apenas a linha do perfil
    ///
    /// A limpeza da credencial no provedor de autenticação externo
    /// é manual e fora de banda, por segurança
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM profiles WHERE id = ?1", params![id])?;
        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "UserProfile".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    // ==========================================
    // Leitura
    // ==========================================

    /// Lista todos os perfis (sem credencial)
    pub fn list_all(&self) -> RepositoryResult<Vec<UserProfile>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, username, role, created_at FROM profiles ORDER BY username",
        )?;

        let rows = stmt.query_map([], map_profile_row)?;
        let mut profiles = Vec::new();
        for row in rows {
            profiles.push(row?);
        }
        Ok(profiles)
    }

    /// Busca um perfil por id (sem credencial)
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<UserProfile>> {
        let conn = self.get_conn()?;
        let result = conn
            .query_row(
                "SELECT id, username, role, created_at FROM profiles WHERE id = ?1",
                params![id],
                map_profile_row,
            )
            .optional()?;
        Ok(result)
    }

    /// Busca um perfil por nome de usuário, com credencial
    ///
    /// Uso exclusivo do serviço de autenticação
    pub fn find_by_username_with_credential(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<ProfileWithCredential>> {
        let conn = self.get_conn()?;
        let result = conn
            .query_row(
                "SELECT id, username, role, created_at, password_hash FROM profiles WHERE username = ?1",
                params![username],
                |row| {
                    Ok(ProfileWithCredential {
                        profile: map_profile_row(row)?,
                        password_hash: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(result)
    }
}

/// Mapeia uma linha da tabela profiles para a entidade (sem hash)
fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<UserProfile> {
    Ok(UserProfile {
        id: row.get(0)?,
        username: row.get(1)?,
        role: row
            .get::<_, String>(2)
            .map(|s| UserRole::from_str(&s).unwrap_or(UserRole::User))?,
        created_at: row
            .get::<_, String>(3)?
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|_| chrono::Utc::now()),
    })
}
