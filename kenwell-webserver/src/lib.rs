#[macro_use]
extern crate log;

use std::net::IpAddr;

use kenwell_core::gateways::identity::IdentityGateway;
use kenwell_db_mem::Store;

mod web;

pub async fn run(db: Store, identity: Box<dyn IdentityGateway + Send + Sync>, address: IpAddr, port: u16) {
    web::run(db, identity, address, port).await;
}
