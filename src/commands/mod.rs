pub mod chat;
pub mod data;
pub mod prefs;
pub mod stats;
pub mod user;

pub use chat::*;
pub use data::*;
pub use prefs::*;
pub use stats::*;
pub use user::*;
