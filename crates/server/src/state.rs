use service::fleet::{repo::SeaOrmFleetRepository, FleetService};

pub type Fleet = FleetService<SeaOrmFleetRepository>;

/// Shared handler state. Cloned per request; the service holds an `Arc` to the repository.
#[derive(Clone)]
pub struct AppState {
    pub fleet: Fleet,
}

impl AppState {
    pub fn new(fleet: Fleet) -> Self { Self { fleet } }
}
