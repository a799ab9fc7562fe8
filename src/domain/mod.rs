pub mod identity;
pub mod product;
pub mod event;

pub use identity::*;
pub use product::*;
pub use event::*;
