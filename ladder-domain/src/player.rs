use std::sync::Arc;

use crate::{ServiceError, ServiceResult, account::AccountKind};

pub type PlayerId = i64;

pub type PlayerUsername = String;

/// A registered player. The id is assigned by the repository at creation
/// and never changes; the rating and win streak only change through a game
/// outcome applied via the player's bound account strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: PlayerUsername,
    pub rating: i64,
    pub account: AccountKind,
    pub win_streak: u32,
}

#[derive(Clone, Debug)]
pub struct NewPlayer {
    pub username: PlayerUsername,
    pub rating: i64,
    pub account: AccountKind,
}

#[derive(Clone, Debug, Default)]
pub struct PlayerUpdate {
    pub rating: Option<i64>,
    pub win_streak: Option<u32>,
}

pub type ArcPlayerRepository = Arc<Box<dyn PlayerRepository + Send + Sync + 'static>>;

pub trait PlayerRepository {
    /// Assigns the next id. Fails with `NotPossible` if the username is
    /// already taken (case-insensitive).
    fn create_player(&self, player: &NewPlayer) -> ServiceResult<Player>;
    /// All players, in creation order.
    fn get_players(&self) -> ServiceResult<Vec<Player>>;
    fn update_player(&self, id: PlayerId, update: &PlayerUpdate) -> ServiceResult<()>;
}

/// Resolves operator input to a player: input that parses as an integer
/// selects by exact id, anything else by case-insensitive username.
pub fn find_player<'a>(players: &'a [Player], query: &str) -> Option<&'a Player> {
    if let Ok(id) = query.parse::<PlayerId>() {
        players.iter().find(|p| p.id == id)
    } else {
        players
            .iter()
            .find(|p| p.username.eq_ignore_ascii_case(query))
    }
}

pub fn validate_username(username: &str) -> ServiceResult<()> {
    if username.is_empty() || username.len() > 15 {
        return ServiceError::bad_request("Username must be between 1 and 15 characters");
    }
    if username
        .chars()
        .next()
        .is_none_or(|c| !c.is_ascii_alphabetic())
    {
        return ServiceError::bad_request("Username must start with a letter");
    }
    if username
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_')
    {
        return ServiceError::bad_request("Username must be alphanumeric");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, username: &str, rating: i64) -> Player {
        Player {
            id,
            username: username.to_string(),
            rating,
            account: AccountKind::Standard,
            win_streak: 0,
        }
    }

    #[test]
    fn test_find_player_by_id() {
        let players = vec![player(1, "alice", 1000), player(2, "bob", 1200)];
        let found = find_player(&players, "2").expect("player should be found");
        assert_eq!(found.username, "bob");
    }

    #[test]
    fn test_find_player_by_name_ignores_case() {
        let players = vec![player(1, "alice", 1000), player(2, "bob", 1200)];
        let found = find_player(&players, "ALICE").expect("player should be found");
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_find_player_id_and_name_agree() {
        let players = vec![player(1, "alice", 1000), player(2, "bob", 1200)];
        let by_id = find_player(&players, "1").expect("lookup by id");
        let by_name = find_player(&players, "Alice").expect("lookup by name");
        assert_eq!(by_id, by_name);
    }

    #[test]
    fn test_find_player_misses() {
        let players = vec![player(1, "alice", 1000)];
        assert!(find_player(&players, "7").is_none());
        assert!(find_player(&players, "mallory").is_none());
    }

    #[test]
    fn test_numeric_input_never_matches_usernames() {
        // Integer input selects strictly by id, even if no id matches.
        let players = vec![player(1, "alice", 1000)];
        assert!(find_player(&players, "42").is_none());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("alice_2").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("1alice").is_err());
        assert!(validate_username("al ice").is_err());
        assert!(validate_username("averyveryverylongname").is_err());
    }
}
