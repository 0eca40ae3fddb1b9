use crate::core::config::Config;
use crate::domain::staffing::StaffingService;
use std::sync::Arc;

pub trait ApplicationServices: Clone + Send + Sync {
    type STAFFING: StaffingService + Send;

    fn config(&self) -> Config;

    fn staffing_service(&self) -> Arc<Self::STAFFING>;
}

pub struct Application<STAFFING>
where
    STAFFING: StaffingService + Send + Sync + 'static,
{
    config: Config,
    staffing_service: Arc<STAFFING>,
}

impl<STAFFING> Application<STAFFING>
where
    STAFFING: StaffingService + Send + Sync + 'static,
{
    pub fn new(config: Config, staffing_service: STAFFING) -> Self {
        Self {
            config,
            staffing_service: Arc::new(staffing_service),
        }
    }
}

impl<STAFFING> Clone for Application<STAFFING>
where
    STAFFING: StaffingService + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            staffing_service: self.staffing_service.clone(),
        }
    }
}

impl<STAFFING> ApplicationServices for Application<STAFFING>
where
    STAFFING: StaffingService + Send + Sync + 'static,
{
    type STAFFING = STAFFING;

    fn config(&self) -> Config {
        self.config.clone()
    }

    fn staffing_service(&self) -> Arc<Self::STAFFING> {
        self.staffing_service.clone()
    }
}
