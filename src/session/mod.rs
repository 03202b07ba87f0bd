//! Session layer between the engine and a UI.
//!
//! - `GameSession`: timing, hint highlight set, shake set
//! - `Clock`: injected time source (`SystemClock`, `ManualClock`)
//!
//! The session owns no timers. Transient state carries a deadline on the
//! session clock; the UI polls or calls `expire_transients()`.

mod clock;
mod game_session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game_session::GameSession;
