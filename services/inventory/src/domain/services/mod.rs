pub mod quantity_adjustment;

pub use quantity_adjustment::*;
