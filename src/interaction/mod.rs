pub mod picker;
pub mod pointer;
pub mod session;
