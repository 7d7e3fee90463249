pub mod cache;
pub mod lists;

pub use cache::*;
pub use lists::*;
