/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(
    "digitalocean-api-rust/",
    env!("CARGO_PKG_VERSION"),
    " (+https://developers.digitalocean.com/v2/)"
);

pub fn get_user_agent() -> &'static str {
    USER_AGENT
}
