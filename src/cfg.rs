use std::{
    env,
    net::{IpAddr, Ipv4Addr},
};

const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub admin_user_id: Option<String>,
    pub admin_token: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(address) = env::var("KENWELL_ADDRESS") {
            match address.parse() {
                Ok(address) => cfg.address = address,
                Err(_) => log::warn!("Ignoring invalid KENWELL_ADDRESS '{address}'"),
            }
        }
        if let Ok(port) = env::var("KENWELL_PORT") {
            match port.parse() {
                Ok(port) => cfg.port = port,
                Err(_) => log::warn!("Ignoring invalid KENWELL_PORT '{port}'"),
            }
        }
        cfg.admin_user_id = env::var("KENWELL_ADMIN_USER_ID").ok();
        cfg.admin_token = env::var("KENWELL_ADMIN_TOKEN").ok();
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            port: DEFAULT_PORT,
            admin_user_id: None,
            admin_token: None,
        }
    }
}
