mod authorize_deletion;
mod delete_user_completely;
mod error;

#[cfg(test)]
pub mod tests;

pub type Result<T> = std::result::Result<T, Error>;

pub use self::{authorize_deletion::*, delete_user_completely::*, error::Error};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{event::*, id::*, session::*, user::*},
        gateways::identity,
        repositories::*,
    };
}
