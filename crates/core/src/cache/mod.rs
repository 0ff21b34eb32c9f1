mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{product_key, product_list_key, product_list_pattern};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_page, deserialize_product, serialize_page, serialize_product, SerializationError,
};
pub use traits::Cache;
