//! Session lifecycle: silent refresh, the mount-time auth gate, and the
//! credential exchanges that create a session.

pub mod flows;
pub mod gate;
pub mod refresher;
