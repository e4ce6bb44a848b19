//! Classifies Minecraft: Java Edition mod archives and plans their installation.

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::{GameDefinition, InstallerConfig};
pub use crate::core::classifier::classify;
pub use crate::core::planner::{plan, PlanContext};
pub use crate::core::registry::InstallerRegistry;
pub use crate::models::error::{PlanningError, SError};
pub use crate::models::install_type::InstallTypeId;
pub use crate::models::instruction::{InstallInstruction, InstallPlan};
