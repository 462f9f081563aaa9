mod domain;
mod error;
pub mod editor;
pub mod grid;
pub mod quick_add;
pub mod reference;
pub mod store;
pub mod submission;
pub mod week;

pub use domain::*;
pub use editor::*;
pub use error::*;
pub use grid::*;
pub use quick_add::*;
pub use reference::*;
pub use store::*;
pub use submission::*;
pub use week::*;
