use std::path::PathBuf;

use chat_jwt::logging::Redacted;
use chat_jwt::{
    generate_token, login_url, SecurityConfig, DEFAULT_BASE_URL, DEFAULT_SETTINGS_PATH,
};
use clap::{ArgAction, Parser};
use tracing::info;

mod telemetry;

#[derive(Parser)]
#[command(name = "chat-token")]
#[command(about = "Issue a signed chat login token")]
struct Args {
    /// Username to issue the token for (sub and username claims)
    #[arg(short, long, default_value = "killer")]
    username: String,

    /// Grant operator/moderator privileges
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    op: bool,

    /// Signing secret; overrides CHAT_JWT_SECRET and the settings file
    #[arg(long)]
    secret: Option<String>,

    /// Chat server settings file to read [JWT] SecretKey from
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Chat page the token is appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    telemetry::init_tracing(args.verbose);

    let (security, source) = match SecurityConfig::resolve(args.secret.as_deref(), &args.settings)
    {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    info!(?source, "resolved JWT secret");

    let token = match generate_token(&args.username, args.op, &security) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        username = %args.username,
        op = args.op,
        token = %Redacted(&token),
        base_url = %args.base_url,
        "issued chat token"
    );

    let url = login_url(&args.base_url, &token);
    print!("{}", render_output(&token, &url));
}

/// The two stdout lines: the raw token, then the login URL embedding it.
fn render_output(token: &str, url: &str) -> String {
    format!("JWT Token: {token}\nUse it in the URL: {url}\n")
}
