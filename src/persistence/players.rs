use std::sync::Mutex;

use ladder_domain::{
    ServiceError, ServiceResult,
    player::{NewPlayer, Player, PlayerId, PlayerRepository, PlayerUpdate},
};

use crate::persistence::lock_store;

/// In-memory player store. Insertion order is creation order, which is the
/// order `get_players` reports.
pub struct PlayerRepositoryImpl {
    players: Mutex<Vec<Player>>,
}

impl PlayerRepositoryImpl {
    pub fn new() -> Self {
        Self {
            players: Mutex::new(Vec::new()),
        }
    }
}

impl PlayerRepository for PlayerRepositoryImpl {
    fn create_player(&self, player: &NewPlayer) -> ServiceResult<Player> {
        let mut players = lock_store(&self.players)?;
        if players
            .iter()
            .any(|p| p.username.eq_ignore_ascii_case(&player.username))
        {
            return ServiceError::not_possible("Username already taken");
        }
        let id = players.last().map_or(1, |p| p.id + 1);
        let created = Player {
            id,
            username: player.username.clone(),
            rating: player.rating,
            account: player.account,
            win_streak: 0,
        };
        players.push(created.clone());
        Ok(created)
    }

    fn get_players(&self) -> ServiceResult<Vec<Player>> {
        Ok(lock_store(&self.players)?.clone())
    }

    fn update_player(&self, id: PlayerId, update: &PlayerUpdate) -> ServiceResult<()> {
        let mut players = lock_store(&self.players)?;
        let Some(player) = players.iter_mut().find(|p| p.id == id) else {
            return ServiceError::not_found("Player not found");
        };
        if let Some(rating) = update.rating {
            player.rating = rating;
        }
        if let Some(win_streak) = update.win_streak {
            player.win_streak = win_streak;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ladder_domain::account::AccountKind;

    use super::*;

    fn new_player(username: &str, rating: i64) -> NewPlayer {
        NewPlayer {
            username: username.to_string(),
            rating,
            account: AccountKind::Standard,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let repo = PlayerRepositoryImpl::new();
        let alice = repo.create_player(&new_player("alice", 1000)).unwrap();
        let bob = repo.create_player(&new_player("bob", 1200)).unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.win_streak, 0);
    }

    #[test]
    fn test_get_players_preserves_creation_order() {
        let repo = PlayerRepositoryImpl::new();
        repo.create_player(&new_player("carol", 900)).unwrap();
        repo.create_player(&new_player("alice", 1000)).unwrap();
        repo.create_player(&new_player("bob", 1200)).unwrap();
        let names: Vec<_> = repo
            .get_players()
            .unwrap()
            .into_iter()
            .map(|p| p.username)
            .collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn test_duplicate_username_is_rejected_case_insensitively() {
        let repo = PlayerRepositoryImpl::new();
        repo.create_player(&new_player("alice", 1000)).unwrap();
        let result = repo.create_player(&new_player("ALICE", 1200));
        assert!(matches!(result, Err(ServiceError::NotPossible(_))));
        assert_eq!(repo.get_players().unwrap().len(), 1);
    }

    #[test]
    fn test_update_player_rating_and_streak() {
        let repo = PlayerRepositoryImpl::new();
        let alice = repo.create_player(&new_player("alice", 1000)).unwrap();
        repo.update_player(
            alice.id,
            &PlayerUpdate {
                rating: Some(1016),
                win_streak: Some(1),
            },
        )
        .unwrap();
        let players = repo.get_players().unwrap();
        assert_eq!(players[0].rating, 1016);
        assert_eq!(players[0].win_streak, 1);
        // The id does not churn on update.
        assert_eq!(players[0].id, alice.id);
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_update_unknown_player_fails() {
        let repo = PlayerRepositoryImpl::new();
        let result = repo.update_player(42, &PlayerUpdate::default());
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
