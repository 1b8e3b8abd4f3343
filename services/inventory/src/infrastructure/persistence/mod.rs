mod postgres;
mod rows;

pub use postgres::*;
