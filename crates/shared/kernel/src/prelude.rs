//! Convenience re-exports for feature slices and applications.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::oid::{ObjectId, ObjectIdError, ObjectIdErrorExt};
pub use crate::server::{ApiState, ApiStateError, ApiStateErrorExt};
pub use roster_domain::config::ApiConfig;
pub use roster_domain::registry::{FeatureSlice, InitializedSlice};
