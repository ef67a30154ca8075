pub mod model;
pub mod visitors;
