use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::query::Pagination;

const ID_FIELD: &str = "_id";

/// One page of a list query.
///
/// `total` counts every document matching the filter, regardless of
/// `page` and `limit`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    /// `0` when pagination is disabled
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        let (limit, total_pages) = match pagination.limit {
            Some(limit) => (limit, total.div_ceil(limit)),
            None => (0, u64::from(total > 0)),
        };
        Self {
            items,
            total,
            page: pagination.page,
            limit,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

impl<T: Serialize> Page<T> {
    /// Serializes the items, keeping only `fields` (and `_id`) when a
    /// projection was requested.
    pub fn project(self, fields: Option<&[String]>) -> Result<Page<Value>, serde_json::Error> {
        let mut items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let value = serde_json::to_value(item)?;
            items.push(match fields {
                Some(fields) => select_fields(value, fields),
                None => value,
            });
        }
        Ok(Page {
            items,
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        })
    }
}

fn select_fields(value: Value, fields: &[String]) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .filter(|(key, _)| key == ID_FIELD || fields.iter().any(|f| f == key))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "_id")]
        id: u32,
        rating: u8,
        comment: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, rating: 5, comment: "tốt" },
            Row { id: 2, rating: 3, comment: "tạm" },
        ]
    }

    #[test]
    fn test_total_pages() {
        let paginated = Pagination { page: 2, limit: Some(4) };
        let page = Page::new(vec![(); 4], 10, &paginated);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.limit, 4);
        assert_eq!(page.page, 2);

        let empty = Page::<()>::new(vec![], 0, &paginated);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_unpaginated_total_pages() {
        let all = Pagination { page: 1, limit: None };
        assert_eq!(Page::new(vec![(); 3], 3, &all).total_pages, 1);
        assert_eq!(Page::<()>::new(vec![], 0, &all).total_pages, 0);
        assert_eq!(Page::new(vec![(); 3], 3, &all).limit, 0);
    }

    #[test]
    fn test_project_keeps_id_and_requested_fields() {
        let pagination = Pagination { page: 1, limit: Some(4) };
        let page = Page::new(rows(), 2, &pagination)
            .project(Some(&["rating".to_string()]))
            .unwrap();
        assert_eq!(page.items[0], json!({"_id": 1, "rating": 5}));
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_project_without_fields_is_identity() {
        let pagination = Pagination { page: 1, limit: Some(4) };
        let page = Page::new(rows(), 2, &pagination).project(None).unwrap();
        assert_eq!(page.items[1], json!({"_id": 2, "rating": 3, "comment": "tạm"}));
    }

    #[test]
    fn test_serializes_camel_case() {
        let pagination = Pagination { page: 1, limit: Some(4) };
        let value = serde_json::to_value(Page::new(vec![1], 1, &pagination)).unwrap();
        assert_eq!(value["totalPages"], 1);
    }
}
