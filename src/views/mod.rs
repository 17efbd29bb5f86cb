pub mod layout;
pub mod quiz;
pub mod results;

pub use layout::{error_page, page};
