// ==========================================
// Inventário de Impressoras - Serviço de autenticação
// ==========================================
// Responsabilidade: entrada/saída de sessão e cadastro de
// credenciais (hash Argon2)
// Linha vermelha: o hash nunca sai desta camada; a sessão
// exposta carrega só id, nome e papel
// ==========================================

use crate::auth::error::{AuthError, AuthResult};
use crate::domain::user::{NewUser, UserProfile, UserRole};
use crate::repository::profile_repo::ProfileRepository;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use std::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

/// Tamanho mínimo de senha aceito no cadastro
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sessão ativa, sem credencial
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: UserRole,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

type SessionListener = Box<dyn Fn(Option<&Session>) + Send + Sync>;

pub struct AuthService {
    profile_repo: ProfileRepository,
    current: Mutex<Option<Session>>,
    listeners: Mutex<Vec<SessionListener>>,
}

impl AuthService {
    pub fn new(profile_repo: ProfileRepository) -> Self {
        Self {
            profile_repo,
            current: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    // ==========================================
    // Sessão
    // ==========================================

    /// Autentica e abre a sessão
    ///
    /// Usuário inexistente e senha errada retornam o mesmo erro,
    /// sem distinguir qual dos dois falhou
    pub fn sign_in(&self, username: &str, password: &str) -> AuthResult<Session> {
        let record = self
            .profile_repo
            .find_by_username_with_credential(username)?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&record.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_err()
        {
            warn!(username = %username, "Tentativa de login com senha inválida");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            user_id: record.profile.id.clone(),
            username: record.profile.username.clone(),
            role: record.profile.role,
        };

        self.set_current(Some(session.clone()))?;
        info!(user_id = %session.user_id, role = %session.role.as_str(), "Sessão aberta");
        Ok(session)
    }

    /// Encerra a sessão ativa, se houver
    pub fn sign_out(&self) -> AuthResult<()> {
        self.set_current(None)?;
        info!("Sessão encerrada");
        Ok(())
    }

    /// Sessão ativa no momento
    pub fn current_session(&self) -> AuthResult<Option<Session>> {
        let guard = self
            .current
            .lock()
            .map_err(|e| AuthError::LockError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// Registra um observador de mudança de sessão
    pub fn on_session_change(&self, listener: SessionListener) -> AuthResult<()> {
        let mut listeners = self
            .listeners
            .lock()
            .map_err(|e| AuthError::LockError(e.to_string()))?;
        listeners.push(listener);
        Ok(())
    }

    fn set_current(&self, session: Option<Session>) -> AuthResult<()> {
        {
            let mut guard = self
                .current
                .lock()
                .map_err(|e| AuthError::LockError(e.to_string()))?;
            *guard = session.clone();
        }

        let listeners = self
            .listeners
            .lock()
            .map_err(|e| AuthError::LockError(e.to_string()))?;
        for listener in listeners.iter() {
            listener(session.as_ref());
        }
        Ok(())
    }

    // ==========================================
    // Cadastro
    // ==========================================

    /// Cadastra um novo perfil com credencial
    ///
    /// O cadastro não troca a sessão ativa: um administrador cria
    /// contas para terceiros sem ser deslogado
    pub fn sign_up(&self, new_user: &NewUser) -> AuthResult<UserProfile> {
        if new_user.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }

        if self
            .profile_repo
            .find_by_username_with_credential(&new_user.username)?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(new_user.username.clone()));
        }

        let password_hash = hash_password(&new_user.password)?;

        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            username: new_user.username.clone(),
            role: new_user.role,
            created_at: Utc::now(),
        };

        self.profile_repo.insert(&profile, &password_hash)?;
        info!(user_id = %profile.id, role = %profile.role.as_str(), "Perfil cadastrado");
        Ok(profile)
    }

    /// Redefine a senha de um perfil existente
    pub fn reset_password(&self, user_id: &str, new_password: &str) -> AuthResult<()> {
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }

        let password_hash = hash_password(new_password)?;
        self.profile_repo
            .update_password_hash(user_id, &password_hash)?;
        info!(user_id = %user_id, "Senha redefinida");
        Ok(())
    }
}

/// Gera o hash Argon2 de uma senha com sal aleatório
fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_e_verificacao() {
        let hash = hash_password("senha-forte").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"senha-forte", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"senha-errada", &parsed)
            .is_err());
    }

    #[test]
    fn test_hashes_distintos_para_mesma_senha() {
        // Sal aleatório por cadastro
        let a = hash_password("senha-forte").unwrap();
        let b = hash_password("senha-forte").unwrap();
        assert_ne!(a, b);
    }
}
