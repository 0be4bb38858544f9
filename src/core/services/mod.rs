pub mod goal_service;
pub mod state_service;
pub mod stats_service;

pub use goal_service::{GoalService, Signal, ENCOURAGEMENT_THRESHOLD, WARNING_THRESHOLD};
pub use state_service::StateService;
pub use stats_service::StatsService;
