use super::prelude::*;
use crate::authorization;

/// Decides whether the calling principal may delete the target user.
///
/// The caller identity must already have been verified by the
/// transport; `None` means the request carried no identity at all.
/// Performs a single point read (the caller's own record) and no
/// writes. The checks run in a fixed order so that an unauthorized
/// caller never learns anything about the target argument.
pub fn authorize_user_deletion<R>(repo: &R, caller: Option<&Id>, target: &Id) -> Result<User>
where
    R: UserRepo + ?Sized,
{
    let caller_id = caller.ok_or(Error::Unauthenticated)?;
    let caller = repo
        .try_get_user(caller_id)?
        .ok_or(Error::CallingUserNotFound)?;
    authorization::authorize_administrator(&caller)?;
    if !target.is_valid() {
        return Err(Error::MissingUserId);
    }
    if *target == caller.id {
        return Err(Error::SelfDeletion);
    }
    Ok(caller)
}
