use contracts::system::users::{ChangePasswordForm, DniRecord, UserForm};

use crate::shared::api_utils::{segment, with_query};
use crate::shared::http::{get_json, patch_json, post_json, ApiResult};
use crate::shared::query_params::ListQuery;

/// Path of the paged users list for `query`
pub fn list_path(query: &ListQuery) -> String {
    with_query("/usuarios/obtener-usuarios", &query.to_backend_query())
}

pub async fn create_user(form: &UserForm) -> ApiResult<()> {
    post_json("/usuarios/crear-usuario", form).await
}

/// Identity lookup in the national registry (RENIEC) through the API
pub async fn lookup_dni(dni: &str) -> ApiResult<DniRecord> {
    get_json(&format!("/usuarios/{}/verificar-dni", segment(dni.trim()))).await
}

pub async fn change_password(id: i64, form: &ChangePasswordForm) -> ApiResult<()> {
    patch_json(&format!("/usuarios/{}/cambiar-contrasena", id), form).await
}
