mod delete_user;

pub mod prelude {
    pub use super::delete_user::*;
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use kenwell_core::{
    entities::id::Id, gateways::identity::IdentityGateway, repositories::DocumentStore, usecases,
};

#[cfg(test)]
pub(crate) mod tests;
