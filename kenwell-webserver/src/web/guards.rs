use std::ops::Deref;

use rocket::{
    request::{FromRequest, Outcome, Request},
    State,
};

use kenwell_core::{entities::id::Id, gateways::identity::IdentityGateway};

/// Managed handle to the identity provider.
pub struct Identity(pub Box<dyn IdentityGateway + Send + Sync>);

impl Deref for Identity {
    type Target = dyn IdentityGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Authentication context of an incoming request.
///
/// Resolving the caller never rejects the request by itself; the
/// operations decide whether a missing identity is an error.
#[derive(Debug)]
pub struct Auth {
    caller: Option<Id>,
}

impl Auth {
    pub fn caller(&self) -> Option<&Id> {
        self.caller.as_ref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens: Vec<&str> = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .collect();

        let mut caller = None;
        if let Some(identity) = request.guard::<&State<Identity>>().await.succeeded() {
            for token in bearer_tokens {
                match identity.verify_token(token) {
                    Ok(Some(id)) => {
                        caller = Some(id);
                        break;
                    }
                    Ok(None) => (),
                    Err(err) => {
                        warn!("Failed to verify bearer token: {err}");
                    }
                }
            }
        }

        Outcome::Success(Auth { caller })
    }
}
