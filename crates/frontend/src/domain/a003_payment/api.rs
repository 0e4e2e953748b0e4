use crate::shared::api_utils::with_query;
use crate::shared::query_params::ListQuery;

/// Path of the paged payments list for `query`
pub fn list_path(query: &ListQuery) -> String {
    with_query("/pagos/obtener-pagos", &query.to_backend_query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_params::FilterParam;

    #[test]
    fn test_method_filter_only_when_set() {
        let q = ListQuery::from_search("?query=TX&limit=20", FilterParam::Method);
        assert_eq!(list_path(&q), "/pagos/obtener-pagos?page=1&query=TX&page_size=20");
        let q = q.with_filter("yape");
        assert_eq!(
            list_path(&q),
            "/pagos/obtener-pagos?page=1&query=TX&page_size=20&method=yape"
        );
    }
}
