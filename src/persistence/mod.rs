use std::sync::{Mutex, MutexGuard};

use ladder_domain::{ServiceError, ServiceResult};

mod games;
mod players;

pub use games::GameRepositoryImpl;
pub use players::PlayerRepositoryImpl;

fn lock_store<T>(store: &Mutex<T>) -> ServiceResult<MutexGuard<'_, T>> {
    store
        .lock()
        .map_err(|_| ServiceError::Internal("Repository lock poisoned".to_string()))
}
