use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with an existing account.
    Login(AuthLoginArgs),
    /// Create a reader account and sign in.
    Register(AuthRegisterArgs),
    /// Sign out and forget the stored identity.
    Logout,
    /// Show the signed-in user.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}
