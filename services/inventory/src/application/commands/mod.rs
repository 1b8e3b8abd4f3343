mod material_commands;
mod settings_commands;
mod transaction_commands;

pub use material_commands::*;
pub use settings_commands::*;
pub use transaction_commands::*;
