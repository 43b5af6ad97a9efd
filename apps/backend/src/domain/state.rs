use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Accepting players.
    Lobby,
    /// Roles assigned, missions being played.
    Rounds,
    /// A team reached the winning number of missions.
    Ended,
}

impl GameStatus {
    /// Parse a status filter, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lobby" => Some(GameStatus::Lobby),
            "rounds" => Some(GameStatus::Rounds),
            "ended" => Some(GameStatus::Ended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Owner,
    Participant,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Unassigned,
    Citizen,
    Enemy,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    None,
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionState {
    None,
    Collaborate,
    Sabotage,
}

/// Round lifecycle states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundStatus {
    /// Leader has to propose a group.
    WaitingOnLeader,
    /// Every player votes on the proposed group.
    Voting,
    /// Group members submit their mission actions.
    WaitingOnGroup,
    /// Result decided; the round is sealed.
    Ended,
}

/// Proposal attempt within a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VotePhase {
    Vote1,
    Vote2,
    Vote3,
}

impl VotePhase {
    /// The phase after a rejected proposal, `None` once attempts are exhausted.
    pub fn next(self) -> Option<VotePhase> {
        match self {
            VotePhase::Vote1 => Some(VotePhase::Vote2),
            VotePhase::Vote2 => Some(VotePhase::Vote3),
            VotePhase::Vote3 => None,
        }
    }
}

/// Which team won a finished mission.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Citizens,
    Enemies,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    None,
    Citizens,
    Enemies,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub player_type: PlayerType,
    pub role: Role,
    pub vote: VoteState,
    pub action: ActionState,
}

impl Player {
    pub fn new(name: impl Into<String>, player_type: PlayerType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            player_type,
            role: Role::Unassigned,
            vote: VoteState::None,
            action: ActionState::None,
        }
    }

    pub fn is_enemy(&self) -> bool {
        self.role == Role::Enemy
    }

    pub fn reset_transient(&mut self) {
        self.vote = VoteState::None;
        self.action = ActionState::None;
    }
}

/// Game document: the aggregate root for players and round pointers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub status: GameStatus,
    pub password: Option<String>,
    /// Join order.
    pub players: Vec<Player>,
    pub current_round: Option<Uuid>,
    /// Root of every random decision taken for this game.
    pub rng_seed: u64,
    pub lock_version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Game {
    /// A fresh lobby with the owner as its only player.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        password: Option<String>,
        rng_seed: u64,
    ) -> Self {
        let owner = owner.into();
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner: owner.clone(),
            status: GameStatus::Lobby,
            password: password.filter(|p| !p.is_empty()),
            players: vec![Player::new(owner, PlayerType::Owner)],
            current_round: None,
            rng_seed,
            lock_version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.player(name).is_some()
    }

    pub fn is_owner(&self, name: &str) -> bool {
        self.player(name)
            .is_some_and(|p| p.player_type == PlayerType::Owner)
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn enemy_names(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| p.is_enemy())
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn reset_players_transient(&mut self) {
        for player in &mut self.players {
            player.reset_transient();
        }
    }

    pub fn reset_votes(&mut self) {
        for player in &mut self.players {
            player.vote = VoteState::None;
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

/// Round document: one mission attempt cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub game_id: Uuid,
    /// 1-based mission number.
    pub round_no: u8,
    /// Leader's player name.
    pub leader: String,
    pub status: RoundStatus,
    pub phase: VotePhase,
    pub group: Vec<String>,
    /// Arrival order, `true` = approve.
    pub votes: Vec<bool>,
    /// Arrival order, `true` = collaborate.
    pub actions: Vec<bool>,
    pub result: RoundResult,
    pub lock_version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Round {
    pub fn is_ended(&self) -> bool {
        self.status == RoundStatus::Ended
    }

    pub fn in_group(&self, name: &str) -> bool {
        self.group.iter().any(|m| m == name)
    }

    pub fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}
