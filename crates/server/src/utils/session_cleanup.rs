use log::warn;
use std::time::Duration;
use tower_sessions::ExpiredDeletion;

/// Delete expired sessions every `period`, logging failures and carrying on
pub async fn delete_expired_sessions<S>(store: S, period: Duration)
where
    S: ExpiredDeletion,
{
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        if let Err(e) = store.delete_expired().await {
            warn!("Failed to delete expired sessions: {e}");
        }
    }
}
