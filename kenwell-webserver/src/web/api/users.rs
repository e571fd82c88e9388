use super::*;
use kenwell_boundary::{DeleteUserRequest, UserDeleted};

/// Cascading deletion of a user account.
///
/// Requires an administrator caller. Removes the user record and all
/// dependent documents in one atomic batch, then the identity account.
#[post("/users/delete", format = "application/json", data = "<data>")]
pub fn post_delete_user(
    db: store::Db,
    identity: &State<Identity>,
    auth: Auth,
    data: JsonResult<DeleteUserRequest>,
) -> Result<UserDeleted> {
    let req = data?.into_inner();
    let target = Id::from(req.user_id);
    let deletion =
        flows::delete_user_completely(&*db, &**identity.inner(), auth.caller(), &target)?;
    Ok(Json(UserDeleted {
        success: true,
        message: "User deleted completely (document data + identity account)".into(),
        deleted_documents: deletion.deleted_documents as u64,
    }))
}
