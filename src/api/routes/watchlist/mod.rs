pub mod public;
mod router;
pub use router::{router, watched_profiles};
