pub mod aggregate;
pub mod context;
pub mod handicap;
pub mod match_points;
pub mod net;
pub mod putt;
pub mod sort_utils;

pub use aggregate::*;
pub use context::*;
pub use handicap::*;
pub use match_points::*;
pub use net::*;
pub use putt::*;
pub use sort_utils::*;
