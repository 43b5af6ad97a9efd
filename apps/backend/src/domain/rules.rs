pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 10;
pub const MAX_ROUNDS: u8 = 5;
pub const WINS_TO_END: usize = 3;
pub const MAX_VOTE_ATTEMPTS: u8 = 3;

// Mission group sizes, rows = 5..=10 players, columns = rounds 1..=5.
const GROUP_SIZES: [[u8; MAX_ROUNDS as usize]; MAX_PLAYERS - MIN_PLAYERS + 1] = [
    [2, 3, 2, 3, 3],
    [2, 3, 4, 3, 4],
    [2, 3, 3, 4, 4],
    [3, 4, 4, 5, 5],
    [3, 4, 4, 5, 5],
    [3, 4, 4, 5, 5],
];

/// Number of players that must go on the mission for `round_no`.
///
/// Returns `None` outside 5..=10 players or rounds 1..=5.
pub fn required_group_size(player_count: usize, round_no: u8) -> Option<usize> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return None;
    }
    if round_no == 0 || round_no > MAX_ROUNDS {
        return None;
    }
    Some(GROUP_SIZES[player_count - MIN_PLAYERS][(round_no - 1) as usize] as usize)
}

/// How many enemies a game of `player_count` players gets.
pub fn enemy_count(player_count: usize) -> usize {
    match player_count {
        0..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

pub fn can_start_with(player_count: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count)
}
