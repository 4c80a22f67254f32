pub mod error;
pub mod phy;
pub mod ui;
pub mod utils;

pub use error::{Error, InvalidInput, Result};
