//! Remote document store synchronization

pub mod gist;
pub mod worker;

pub use gist::{CloudError, GistClient};
pub use worker::{CloudRequest, CloudResponse, CloudWorker};
