// ==========================================
// Inventário de Impressoras - API de usuários
// ==========================================
// Responsabilidade: gestão de perfis de acesso
// Toda a superfície é restrita a admin
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::permission::require_admin;
use crate::auth::service::AuthService;
use crate::auth::Session;
use crate::domain::user::{NewUser, UserProfile, UserRole};
use crate::repository::profile_repo::ProfileRepository;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UserApi {
    profile_repo: ProfileRepository,
    auth: Arc<AuthService>,
}

impl UserApi {
    pub fn new(profile_repo: ProfileRepository, auth: Arc<AuthService>) -> Self {
        Self { profile_repo, auth }
    }

    /// Lista os perfis cadastrados (sem credencial)
    pub fn list_users(&self, session: &Session) -> ApiResult<Vec<UserProfile>> {
        require_admin(session)?;
        Ok(self.profile_repo.list_all()?)
    }

    /// Cria um perfil com credencial
    ///
    /// A sessão do admin que cria permanece ativa
    #[instrument(skip(self, session, new_user), fields(username = %new_user.username))]
    pub fn create_user(&self, session: &Session, new_user: &NewUser) -> ApiResult<UserProfile> {
        require_admin(session)?;
        let profile = self.auth.sign_up(new_user)?;
        info!(user_id = %profile.id, created_by = %session.user_id, "Usuário criado");
        Ok(profile)
    }

    /// Altera nome de usuário e papel de um perfil
    ///
    /// Um admin não rebaixa o próprio papel: isso evitaria o
    /// cenário de sistema sem nenhum administrador
    #[instrument(skip(self, session), fields(user_id = %id))]
    pub fn update_user(
        &self,
        session: &Session,
        id: &str,
        username: &str,
        role: UserRole,
    ) -> ApiResult<()> {
        require_admin(session)?;

        if id == session.user_id && role != UserRole::Admin {
            return Err(ApiError::ValidationError(
                "não é permitido rebaixar o próprio papel".to_string(),
            ));
        }
        if username.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "nome de usuário é obrigatório".to_string(),
            ));
        }

        self.profile_repo.update_by_id(id, username.trim(), role)?;
        info!(user_id = %id, changed_by = %session.user_id, "Usuário atualizado");
        Ok(())
    }

    /// Redefine a senha de um perfil
    #[instrument(skip(self, session, new_password), fields(user_id = %id))]
    pub fn reset_password(
        &self,
        session: &Session,
        id: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        require_admin(session)?;
        self.auth.reset_password(id, new_password)?;
        Ok(())
    }

    /// Remove um perfil
    ///
    /// Autoexclusão é bloqueada
    #[instrument(skip(self, session), fields(user_id = %id))]
    pub fn delete_user(&self, session: &Session, id: &str) -> ApiResult<()> {
        require_admin(session)?;

        if id == session.user_id {
            return Err(ApiError::ValidationError(
                "não é permitido excluir a própria conta".to_string(),
            ));
        }

        self.profile_repo.delete_by_id(id)?;
        info!(user_id = %id, deleted_by = %session.user_id, "Usuário removido");
        Ok(())
    }
}
