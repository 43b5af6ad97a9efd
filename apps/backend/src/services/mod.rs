pub mod access;
pub mod game_flow;
pub mod games;

pub use access::Caller;
pub use game_flow::GameFlowService;
pub use games::{GameService, SearchParams};
