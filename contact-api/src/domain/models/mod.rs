mod activity;
mod contact;
mod contact_field;
mod ids;

pub use activity::*;
pub use contact::*;
pub use contact_field::*;
pub use ids::*;
