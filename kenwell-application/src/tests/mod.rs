pub mod prelude {

    pub use kenwell_core::{
        entities::{builders::Builder, event::UserEvent, id::Id, session::WellnessSession, user::User},
        gateways::identity::IdentityGateway,
        repositories::{Error as RepoError, *},
        usecases::{self, Error as ParameterError},
    };

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    use kenwell_db_mem::Store;
    use kenwell_gateways::identity::InMemoryIdentityGateway;

    pub struct BackendFixture {
        pub db: Store,
        pub identity: InMemoryIdentityGateway,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                db: Store::new(),
                identity: InMemoryIdentityGateway::new(),
            }
        }

        /// Seeds a user record and, optionally, a matching identity
        /// account addressed by the same identifier.
        pub fn create_user(&self, id: &str, role: &str, with_identity_account: bool) {
            self.db
                .create_user(&User::build().id(id).role(role).finish())
                .unwrap();
            if with_identity_account {
                self.identity.register_account(id.into());
            }
        }

        pub fn create_user_event(&self, user_id: &str) {
            self.db
                .create_user_event(&UserEvent::build().user_id(user_id).finish())
                .unwrap();
        }

        pub fn create_wellness_session(&self, nurse_user_id: &str) {
            self.db
                .create_wellness_session(
                    &WellnessSession::build().nurse_user_id(nurse_user_id).finish(),
                )
                .unwrap();
        }
    }
}
