use mongodb::bson::{Bson, Document, doc};

use crate::query::{Condition, ListQuery, SortDirection};

impl ListQuery {
    /// Builds the Mongo filter. Conditions on the same field are merged into
    /// one operator document; every key of `scope` replaces whatever the
    /// client asked for on that field.
    pub fn filter_document(&self, scope: Document) -> Document {
        let mut filter = Document::new();
        for Condition { field, op, value } in &self.conditions {
            let mut ops = match filter.remove(field) {
                Some(Bson::Document(existing)) => existing,
                _ => Document::new(),
            };
            ops.insert(op.mongo_operator(), value.clone());
            filter.insert(field.clone(), ops);
        }

        for (key, value) in scope {
            filter.insert(key, value);
        }
        filter
    }

    pub fn sort_document(&self) -> Document {
        let mut sort = Document::new();
        for (field, direction) in &self.sort {
            sort.insert(field.clone(), direction.as_i32());
        }
        if sort.is_empty() {
            sort = doc! { "createdAt": SortDirection::Desc.as_i32() };
        }
        sort
    }
}
