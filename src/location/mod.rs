pub mod model;
mod validate;

pub use model::{CommentLocation, LocationError};
