use contracts::domain::a001_product::{Product, ProductForm};
use web_sys::{File, FormData};

use crate::shared::api_utils::{segment, with_query};
use crate::shared::http::{get_json, patch_form, ApiError, ApiResult};
use crate::shared::query_params::ListQuery;

/// Path of the paged product list for `query`
pub fn list_path(query: &ListQuery) -> String {
    with_query("/productos/obtener-productos", &query.to_backend_query())
}

pub async fn fetch_product(id: &str) -> ApiResult<Product> {
    get_json(&format!("/productos/{}/obtener-producto", segment(id))).await
}

/// Sends the edited fields (and the new image, if one was picked) as multipart
pub async fn update_product(id: i64, form: &ProductForm, image: Option<File>) -> ApiResult<()> {
    let data = FormData::new().map_err(|_| ApiError::Encode("FormData".to_string()))?;
    for (name, value) in form.to_form_fields() {
        data.append_with_str(name, &value)
            .map_err(|_| ApiError::Encode(name.to_string()))?;
    }
    if let Some(file) = image {
        data.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| ApiError::Encode("file".to_string()))?;
    }
    patch_form(&format!("/productos/{}/actualizar-producto", id), data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_params::FilterParam;

    #[test]
    fn test_list_path() {
        let q = ListQuery::new(FilterParam::Status).with_filter("true");
        assert_eq!(
            list_path(&q),
            "/productos/obtener-productos?page=1&query=&page_size=10&status=true"
        );
    }
}
