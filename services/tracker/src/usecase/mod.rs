pub mod intensity;
pub mod nutrition;
pub mod user;
pub mod weight;
