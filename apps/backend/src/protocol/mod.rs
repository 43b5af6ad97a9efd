pub mod game_view;

pub use game_view::{ApiResponse, GameSummary, RoundDetail};
