// ==========================================
// Inventário de Impressoras - Verificação de permissão
// ==========================================
// Leituras são abertas a qualquer sessão; toda mutação do
// inventário e a gestão de usuários exigem papel admin
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::auth::Session;

/// Exige papel admin na sessão
pub fn require_admin(session: &Session) -> ApiResult<()> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(ApiError::PermissionDenied(
            "operação restrita a administradores".to_string(),
        ))
    }
}
