use super::*;

/// Authorizes the caller and runs the cascading deletion workflow.
///
/// This is the single administrative flow of the backend. Every
/// failure is logged with the target identifier before it is handed
/// back for translation at the transport boundary; nothing is retried
/// and no committed document deletion is ever rolled back.
pub fn delete_user_completely<D, G>(
    db: &D,
    identity: &G,
    caller: Option<&Id>,
    target: &Id,
) -> Result<usecases::UserDeletion>
where
    D: DocumentStore + ?Sized,
    G: IdentityGateway + ?Sized,
{
    usecases::authorize_user_deletion(db, caller, target).map_err(|err| {
        log::warn!("Rejected deletion of user {target}: {err}");
        err
    })?;
    let deletion = usecases::delete_user_completely(db, identity, target).map_err(|err| {
        log::error!("Failed to delete user {target}: {err}");
        err
    })?;
    Ok(deletion)
}
