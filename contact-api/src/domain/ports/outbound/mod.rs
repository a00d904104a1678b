mod activity;
mod avatar_url;
mod contact;
mod contact_field;

pub use activity::*;
pub use avatar_url::*;
pub use contact::*;
pub use contact_field::*;
