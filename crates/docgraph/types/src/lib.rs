pub mod document;
pub mod model;
pub mod object_id;

pub use document::Document;
pub use model::{FieldKind, Model, ModelError, ModelField};
pub use object_id::ObjectId;
