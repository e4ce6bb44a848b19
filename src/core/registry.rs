use crate::config::InstallerConfig;
use crate::core::classifier;
use crate::core::planner::{self, PlanContext};
use crate::models::error::SError;
use crate::models::install_type::InstallTypeId;
use crate::models::instruction::InstallPlan;
use crate::models::request::{ClassificationRequest, PlanRequest};
use tracing::{debug, info};

pub const DEFAULT_PRIORITY: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    pub type_id: InstallTypeId,
    pub priority: i32,
}

/// Installers in the order the host tries them.
#[derive(Clone, Debug, Default)]
pub struct InstallerRegistry {
    registrations: Vec<Registration>,
}

impl InstallerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Minecraft installers. Equal priorities, so registration order decides:
    /// the narrower pack types go before the resource pack catch-all.
    pub fn minecraft() -> Self {
        let mut registry = Self::new();
        for type_id in [
            InstallTypeId::DefaultMod,
            InstallTypeId::DataPack,
            InstallTypeId::ShaderPack,
            InstallTypeId::ResourcePack,
        ] {
            registry.register(type_id, DEFAULT_PRIORITY);
        }
        registry
    }

    /// Lower priority values run first; ties keep registration order.
    pub fn register(&mut self, type_id: InstallTypeId, priority: i32) -> &mut Self {
        self.registrations.push(Registration { type_id, priority });
        // sort_by_key is stable
        self.registrations.sort_by_key(|r| r.priority);
        self
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// First registered type whose classifier accepts the candidate.
    pub fn resolve(
        &self,
        request: &ClassificationRequest,
        config: &InstallerConfig,
    ) -> Option<InstallTypeId> {
        let found = self
            .registrations
            .iter()
            .map(|r| r.type_id)
            .find(|type_id| classifier::classify(*type_id, request, config).matched);
        debug!("resolved {} to {:?}", request.archive_name, found);
        found
    }

    /// Classify, then plan with the winning installer. `Ok(None)` when nothing matched.
    pub async fn install(
        &self,
        request: &ClassificationRequest,
        plan_request: &PlanRequest,
        ctx: &PlanContext<'_>,
    ) -> Result<Option<InstallPlan>, SError> {
        let Some(type_id) = self.resolve(request, ctx.config) else {
            info!("no installer accepts {}", request.archive_name);
            return Ok(None);
        };

        planner::plan(type_id, plan_request, ctx).await.map(Some)
    }
}
