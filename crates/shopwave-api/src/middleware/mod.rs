//! Request middleware: the edge gate and request logging.

pub mod gate;
pub mod logging;
