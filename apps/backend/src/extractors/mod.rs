pub mod path_ids;
pub mod player_headers;
pub mod validated_json;

pub use path_ids::{GameId, RoundPath};
pub use player_headers::PlayerHeaders;
pub use validated_json::{Validate, ValidatedJson};
