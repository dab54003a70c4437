pub mod body;
pub mod spawn;
