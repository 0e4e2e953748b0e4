use serde::{Deserialize, Serialize};

/// Page of records returned by every list endpoint of the store API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: usize,
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

/// Error body sent by the API together with a non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_wire_names() {
        let json = r#"{"data":[1,2,3],"total":23,"totalPages":3}"#;
        let page: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_list_response_missing_counters() {
        let page: ListResponse<u32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(page, ListResponse::default());
    }

    #[test]
    fn test_error_message() {
        let err: ErrorMessage = serde_json::from_str(r#"{"message":"Producto no encontrado","statusCode":404}"#).unwrap();
        assert_eq!(err.message, "Producto no encontrado");
    }
}
