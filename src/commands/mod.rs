pub mod diff;
pub mod history;
pub mod shared;

pub use diff::*;
pub use history::*;
pub use shared::*;
