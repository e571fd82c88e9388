pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{event_builder::*, session_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::Id, user::User};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn role(mut self, role: &str) -> Self {
            self.user.role = role.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    role: "staff".into(),
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::UserEvent, id::Id, time::Timestamp};

    #[derive(Debug)]
    pub struct UserEventBuild {
        event: UserEvent,
    }

    impl UserEventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.event.user_id = user_id.into();
            self
        }
        pub fn kind(mut self, kind: &str) -> Self {
            self.event.kind = kind.into();
            self
        }
        pub fn finish(self) -> UserEvent {
            self.event
        }
    }

    impl Builder for UserEvent {
        type Build = UserEventBuild;
        fn build() -> Self::Build {
            UserEventBuild {
                event: UserEvent {
                    id: Id::new(),
                    user_id: Id::new(),
                    kind: "login".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod session_builder {

    use super::*;
    use crate::{id::Id, session::WellnessSession, time::Timestamp};

    #[derive(Debug)]
    pub struct WellnessSessionBuild {
        session: WellnessSession,
    }

    impl WellnessSessionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.session.id = id.into();
            self
        }
        pub fn nurse_user_id(mut self, nurse_user_id: &str) -> Self {
            self.session.nurse_user_id = nurse_user_id.into();
            self
        }
        pub fn finish(self) -> WellnessSession {
            self.session
        }
    }

    impl Builder for WellnessSession {
        type Build = WellnessSessionBuild;
        fn build() -> Self::Build {
            WellnessSessionBuild {
                session: WellnessSession {
                    id: Id::new(),
                    nurse_user_id: Id::new(),
                    scheduled_at: Timestamp::now(),
                },
            }
        }
    }
}
