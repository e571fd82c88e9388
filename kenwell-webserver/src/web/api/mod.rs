use std::result;

use kenwell_boundary::{Error as JsonErrorResponse, ErrorKind};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, store};
use kenwell_application::prelude as flows;
use kenwell_core::entities::id::Id;

mod error;
mod health;
mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_delete_user,
        // ---   server   --- //
        health::get_health,
    ]
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    kind: ErrorKind,
    message: String,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse { kind, message };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
