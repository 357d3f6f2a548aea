//! Command implementations.

pub mod attention;
pub mod config;
pub mod layout;
pub mod tribes;

pub use self::attention::execute_attention;
pub use self::config::execute_config;
pub use self::layout::execute_layout;
pub use self::tribes::execute_tribes;
