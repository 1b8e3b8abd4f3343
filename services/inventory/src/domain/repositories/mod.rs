mod material_repository;
mod settings_repository;
mod transaction_repository;

pub use material_repository::*;
pub use settings_repository::*;
pub use transaction_repository::*;
