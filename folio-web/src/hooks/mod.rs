pub mod use_hash_sync;
pub mod use_site_state;

pub use use_hash_sync::use_hash_sync;
pub use use_site_state::{use_site_state, SiteState};
