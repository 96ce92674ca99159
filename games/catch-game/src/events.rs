//! `GameEvent` kinds dispatched to the host page.
//!
//! | kind | a | b |
//! |------|---|---|
//! | `SESSION_STARTED` | seconds | |
//! | `SCORE_CHANGED` | score | applied delta |
//! | `POWER_UP` | ball kind code | duration ms |
//! | `TIME_CHANGED` | seconds left | |
//! | `SESSION_ENDED` | final score | catches |

pub const SESSION_STARTED: u32 = 1;
pub const SCORE_CHANGED: u32 = 2;
pub const POWER_UP: u32 = 3;
pub const TIME_CHANGED: u32 = 4;
pub const SESSION_ENDED: u32 = 5;
