use std::net::IpAddr;

use axum::response::Html;
use chrono::Local;
use tracing::debug;
use uuid::Uuid;

use crate::pages::templates::{CAREERS_PAGE, HOME_PAGE};

/// GET /
/// Landing page stamped with the current time, a fresh id and the host's private IP.
pub async fn home_handler() -> Html<String> {
    let current_date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let private_ip = resolve_private_ip()
        .await
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Html(render_home(&current_date, Uuid::new_v4(), &private_ip))
}

pub fn render_home(current_date: &str, system_id: Uuid, private_ip: &str) -> String {
    HOME_PAGE
        .replace("{current_date}", current_date)
        .replace("{system_id}", &system_id.to_string())
        .replace("{private_ip}", private_ip)
}

pub fn render_careers_form(require_phone: bool) -> String {
    CAREERS_PAGE.replace("{phone_required}", if require_phone { "required" } else { "" })
}

/// Resolves this machine's hostname, preferring an IPv4 address.
async fn resolve_private_ip() -> Option<IpAddr> {
    let host = hostname::get().ok()?.into_string().ok()?;
    let addrs: Vec<IpAddr> = match tokio::net::lookup_host((host.as_str(), 0)).await {
        Ok(addrs) => addrs.map(|a| a.ip()).collect(),
        Err(e) => {
            debug!("Hostname {host} did not resolve: {e}");
            return None;
        }
    };
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}
