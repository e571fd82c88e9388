use super::prelude::*;

/// Outcome of a completed cascading deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDeletion {
    /// Number of queued document deletions, including the user record
    /// itself and every dependent document.
    pub deleted_documents: usize,
}

/// Removes the target user's documents and identity account.
///
/// Phase one queues the user record and every dependent document onto
/// a single batch and commits it atomically. Phase two deletes the
/// identity account at the provider. The phases are never reordered
/// and nothing is retried. If phase two fails the committed document
/// deletions remain in effect; the caller has to treat the account
/// state as unknown and follow up manually or call again.
pub fn delete_user_completely<D, G>(db: &D, identity: &G, target: &Id) -> Result<UserDeletion>
where
    D: DocumentStore + ?Sized,
    G: identity::IdentityGateway + ?Sized,
{
    log::info!("Starting deletion for user {target}");

    let mut batch = WriteBatch::default();
    let mut deleted_documents = 0;

    // Queued, not confirmed: deleting an absent user record is a
    // no-op for the batch but still counts.
    batch.delete(DocRef::User(target.clone()));
    deleted_documents += 1;
    log::info!("Queued user document deletion");

    let events = db.user_events_by_user(target)?;
    log::info!("Queued {} user events for deletion", events.len());
    for event in events {
        batch.delete(DocRef::UserEvent(event.id));
        deleted_documents += 1;
    }

    let sessions = db.wellness_sessions_by_nurse(target)?;
    log::info!("Queued {} wellness sessions for deletion", sessions.len());
    for session in sessions {
        batch.delete(DocRef::WellnessSession(session.id));
        deleted_documents += 1;
    }

    db.commit_batch(batch)?;
    log::info!("Successfully deleted {deleted_documents} documents");

    identity.delete_account(target)?;
    log::info!("Successfully deleted identity account for user {target}");

    Ok(UserDeletion { deleted_documents })
}
