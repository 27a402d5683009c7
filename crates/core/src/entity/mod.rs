mod keys;
mod projection;
mod types;

pub use keys::{derive_key, generate_id, EntityKey, ENTITY_PREFIX};
pub use projection::{project_details, project_record};
pub use types::{EntityRecord, ENTITY_KIND};
