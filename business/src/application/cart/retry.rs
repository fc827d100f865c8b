use std::future::Future;

use crate::domain::cart::errors::CartError;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

/// Attempts a cart read-modify-write gets before a lost race is reported.
pub const MAX_WRITE_ATTEMPTS: usize = 3;

/// Re-runs `attempt` while its conditional write loses against a concurrent
/// writer. Each run must re-read the cart.
pub(crate) async fn retry_on_conflict<T, F, Fut>(
    logger: &dyn Logger,
    operation: &str,
    mut attempt: F,
) -> Result<T, CartError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CartError>>,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        match attempt().await {
            Err(CartError::Repository(RepositoryError::Conflict))
                if attempts < MAX_WRITE_ATTEMPTS =>
            {
                logger.warn(&format!(
                    "{operation}: cart changed during write, retrying ({attempts}/{MAX_WRITE_ATTEMPTS})"
                ));
            }
            Err(CartError::Repository(RepositoryError::Conflict)) => {
                logger.error(&format!(
                    "{operation}: giving up after {attempts} conflicting writes"
                ));
                return Err(CartError::ConcurrentModification);
            }
            other => return other,
        }
    }
}
