use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use kenwell_core::entities::{builders::Builder, user::User};
use kenwell_core::repositories::UserRepo;
use kenwell_db_mem::Store;
use kenwell_gateways::identity::InMemoryIdentityGateway;

pub mod prelude {

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use kenwell_core::{
        entities::{
            builders::Builder, event::UserEvent, id::Id, session::WellnessSession, user::User,
        },
        repositories::*,
    };
    pub use kenwell_gateways::identity::InMemoryIdentityGateway;

    pub use super::{register_user, rocket_test_setup};
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, Store, InMemoryIdentityGateway) {
    let db = Store::new();
    let identity = InMemoryIdentityGateway::new();
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let rocket = super::rocket_instance(options, db.clone(), Box::new(identity.clone()));
    let client = Client::tracked(rocket).unwrap();
    (client, db, identity)
}

/// Seeds a user record plus a matching identity account and bearer
/// token.
pub fn register_user(
    db: &Store,
    identity: &InMemoryIdentityGateway,
    id: &str,
    role: &str,
    token: &str,
) {
    db.create_user(&User::build().id(id).role(role).finish())
        .unwrap();
    identity.register_account(id.into());
    identity.register_token(token, id.into());
}
