//! sea-orm entities for the tracker service tables.

pub mod intensity;
pub mod nutrition;
pub mod users;
pub mod weight;
