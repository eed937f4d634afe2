pub mod blocked_sites;
pub mod bookmarks;
pub mod cloud_sync;
pub mod general;
pub mod preview;
pub mod status_bar;
pub mod whitelist;
