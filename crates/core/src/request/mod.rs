mod error;
mod types;
mod validation;

pub use error::RequestError;
pub use types::{ApiRequest, ApiResponse, HttpMethod};
pub use validation::{
    create_record, validate_create, validate_delete, validate_get, validate_list, CreateEntity,
};
