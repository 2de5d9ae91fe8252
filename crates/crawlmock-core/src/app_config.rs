use std::net::SocketAddr;
use std::path::PathBuf;

use crate::validate::UnknownFieldPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub creator_ids_path: PathBuf,
    pub unknown_fields: UnknownFieldPolicy,
    pub max_body_bytes: usize,
}
