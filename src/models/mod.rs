pub mod health;
pub mod item;
pub mod error;

pub use health::*;
pub use item::*;
pub use error::*;
