pub mod models;
pub mod source;
pub use models::*;
pub use source::{ProfileSource, SampleProfiles};
