pub mod model;
pub mod normalize;
pub mod parsing;
pub mod tags;

pub use model::*;
pub use normalize::*;
pub use tags::*;
