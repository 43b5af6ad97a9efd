//! Game-level win evaluation across missions.

use crate::domain::rules::WINS_TO_END;
use crate::domain::state::{Game, GameStatus, Round, RoundResult, Team};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct WinTally {
    pub citizens: usize,
    pub enemies: usize,
}

impl WinTally {
    /// Count results of ended rounds only.
    pub fn from_rounds<'a>(rounds: impl IntoIterator<Item = &'a Round>) -> Self {
        let mut tally = Self::default();
        for round in rounds.into_iter().filter(|r| r.is_ended()) {
            tally.record(round.result);
        }
        tally
    }

    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Citizens => self.citizens += 1,
            RoundResult::Enemies => self.enemies += 1,
            RoundResult::None => {}
        }
    }

    pub fn winner(&self) -> Option<Team> {
        if self.enemies >= WINS_TO_END {
            Some(Team::Enemies)
        } else if self.citizens >= WINS_TO_END {
            Some(Team::Citizens)
        } else {
            None
        }
    }

    /// Team ahead on missions, used when the round ceiling is hit without a winner.
    pub fn leader(&self) -> Option<Team> {
        match self.citizens.cmp(&self.enemies) {
            std::cmp::Ordering::Greater => Some(Team::Citizens),
            std::cmp::Ordering::Less => Some(Team::Enemies),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Mark the game ended once a team has enough missions. Returns `true` when it ends now.
pub fn evaluate_game_end(game: &mut Game, tally: &WinTally) -> bool {
    if tally.winner().is_none() {
        return false;
    }
    if game.status != GameStatus::Ended {
        game.status = GameStatus::Ended;
        game.touch();
    }
    true
}
