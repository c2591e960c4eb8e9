use mongodb::bson::{Binary, Bson, Document, doc, spec::BinarySubtype};
use uuid::Uuid;

/// BSON form of a `Uuid` as the driver stores it when inserting typed documents.
///
/// Documents are written with the non-human-readable serializer, which turns
/// `Uuid` into generic binary. Filters must use the same representation.
pub fn uuid_to_bson(id: Uuid) -> Bson {
    Bson::Binary(Binary {
        subtype: BinarySubtype::Generic,
        bytes: id.as_bytes().to_vec(),
    })
}

/// `{ "_id": <id> }`
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": uuid_to_bson(id) }
}
