pub mod chart;
pub mod dto;
pub mod view;

pub use chart::*;
pub use dto::*;
pub use view::*;
