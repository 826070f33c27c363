use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password and store the session token.
    Login(AuthLoginArgs),
    /// End the session on the server and clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email (defaults to `account.email` from config).
    #[arg(long)]
    pub email: Option<String>,
    /// Read the password from the first line of stdin.
    #[arg(long)]
    pub password_stdin: bool,
}
