pub mod consts;
pub mod dump;
pub mod io;
pub mod logging;
