mod email;
mod form;
mod types;

pub use email::*;
pub use form::*;
pub use types::*;
