use std::ops::Deref;

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Db(kenwell_db_mem::Store);

impl From<kenwell_db_mem::Store> for Db {
    fn from(store: kenwell_db_mem::Store) -> Self {
        Self(store)
    }
}

impl Deref for Db {
    type Target = kenwell_db_mem::Store;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Db {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let db = try_outcome!(request.guard::<&State<Db>>().await);
        Outcome::Success(db.inner().clone())
    }
}
