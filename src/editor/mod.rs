//! Editor core: intents, view projection and session state
//!
//! Nothing in here touches egui widgets or the network directly, so the
//! editing rules can be exercised without a window or a server.

pub mod intent;
pub mod state;
pub mod view;

pub use intent::EditorIntent;
pub use state::{EditorState, IdentifierMode};
