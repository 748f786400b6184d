use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::store::IncidentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub store: Arc<IncidentStore>,
    pub config: Config,
}
