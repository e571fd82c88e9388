use clap::Parser;

use kenwell_core::{entities::user::User, repositories::UserRepo};
use kenwell_db_mem::Store;
use kenwell_gateways::identity::InMemoryIdentityGateway;

mod cfg;

#[derive(Debug, Parser)]
#[command(name = "kenwell", about = "Kenwell user administration backend", version)]
struct Args {
    /// Address to listen on
    #[arg(long)]
    address: Option<std::net::IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = cfg::Cfg::from_env_or_default();
    if let Some(address) = args.address {
        cfg.address = address;
    }
    if let Some(port) = args.port {
        cfg.port = port;
    }

    // Both entry points share one explicitly constructed store and
    // identity handle; nothing is initialized lazily through globals.
    let store = Store::new();
    let identity = InMemoryIdentityGateway::new();

    if let (Some(user_id), Some(token)) = (&cfg.admin_user_id, &cfg.admin_token) {
        seed_admin(&store, &identity, user_id, token);
    } else {
        log::warn!(
            "No administrator account configured \
             (KENWELL_ADMIN_USER_ID/KENWELL_ADMIN_TOKEN)"
        );
    }

    log::info!("Listening on {}:{}", cfg.address, cfg.port);
    kenwell_webserver::run(store, Box::new(identity), cfg.address, cfg.port).await;
}

fn seed_admin(store: &Store, identity: &InMemoryIdentityGateway, user_id: &str, token: &str) {
    let user = User {
        id: user_id.into(),
        role: "admin".into(),
    };
    if let Err(err) = store.create_user(&user) {
        log::error!("Failed to seed administrator {user_id}: {err}");
        return;
    }
    identity.register_account(user_id.into());
    identity.register_token(token, user_id.into());
    log::info!("Seeded administrator account {user_id}");
}
