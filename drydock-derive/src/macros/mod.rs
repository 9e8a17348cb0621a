mod from_row;
mod model;

pub use from_row::derive_from_row;
pub use model::derive_dock_model;
