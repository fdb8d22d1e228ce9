//! Built-in vein mining patterns.

mod dummy;
mod expansive;
mod staircase;
mod thorough;
mod tunnel;

pub use dummy::DummyPattern;
pub use expansive::{ExpansivePattern, EXPANSIVE_KEY};
pub use staircase::{StaircaseDirection, StaircasePattern, STAIRCASE_DOWN_KEY, STAIRCASE_UP_KEY};
pub use thorough::{ThoroughPattern, THOROUGH_KEY};
pub use tunnel::{max_tunnel_depth, TunnelPattern, TUNNEL_KEY};
