//! Test-only builders for games, players and rounds.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::{
    Game, GameStatus, Player, PlayerType, Role, Round, RoundResult, RoundStatus, VotePhase,
};

/// `n` players named `player1..=playerN`, the first one owning the game.
pub fn make_players(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| {
            let kind = if i == 1 {
                PlayerType::Owner
            } else {
                PlayerType::Participant
            };
            Player::new(format!("player{i}"), kind)
        })
        .collect()
}

/// Lobby game with `n` players, owner `player1`, no password.
pub fn make_game(n: usize) -> Game {
    let mut game = Game::new("test-game", "player1", None, 42);
    game.players = make_players(n);
    game
}

/// Started game whose first `enemies` players are enemies.
pub fn started_game(n: usize, enemies: usize) -> Game {
    let mut game = make_game(n);
    for (i, player) in game.players.iter_mut().enumerate() {
        player.role = if i < enemies {
            Role::Enemy
        } else {
            Role::Citizen
        };
    }
    game.status = GameStatus::Rounds;
    game
}

/// Fresh round waiting on `leader`.
pub fn open_round(game_id: Uuid, round_no: u8, leader: &str) -> Round {
    let now = OffsetDateTime::now_utc();
    Round {
        id: Uuid::new_v4(),
        game_id,
        round_no,
        leader: leader.to_string(),
        status: RoundStatus::WaitingOnLeader,
        phase: VotePhase::Vote1,
        group: Vec::new(),
        votes: Vec::new(),
        actions: Vec::new(),
        result: RoundResult::None,
        lock_version: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn ended_round(round_no: u8, result: RoundResult) -> Round {
    let mut round = open_round(Uuid::nil(), round_no, "player1");
    round.status = RoundStatus::Ended;
    round.result = result;
    round
}
