use std::net::IpAddr;

use rocket::{config::Config as RocketCfg, Rocket, Route};

use kenwell_core::gateways::identity::IdentityGateway;
use kenwell_db_mem::Store;

pub mod api;
mod guards;
mod store;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Store,
    identity: Box<dyn IdentityGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    info!("Initialization finished");

    let mut instance = r
        .manage(store::Db::from(db))
        .manage(guards::Identity(identity));
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: Store,
    identity: Box<dyn IdentityGateway + Send + Sync>,
    address: IpAddr,
    port: u16,
) {
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::release_default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
    };
    let instance = rocket_instance(options, db, identity);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
