pub mod entry;
pub mod error;
pub mod install_type;
pub mod instruction;
pub mod paths;
pub mod request;
