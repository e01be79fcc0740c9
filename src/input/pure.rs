pub mod classify;
pub mod stick;
