pub mod retry;
pub mod shutdown;
pub mod types;
pub mod validations;

pub use retry::*;
pub use shutdown::*;
pub use types::*;
pub use validations::*;
