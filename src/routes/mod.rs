mod home;
pub mod members;

pub use home::home;
