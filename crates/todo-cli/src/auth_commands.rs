use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in and store the access token
    Login {
        /// Email address (defaults to the remembered one)
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: String,

        /// Remember the email for the next login
        #[arg(long, conflicts_with = "forget")]
        remember_me: bool,

        /// Drop a previously remembered email
        #[arg(long)]
        forget: bool,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Must match --password
        #[arg(long)]
        confirm_password: String,
    },

    /// Forget the access token
    Logout,

    /// Show whether a session is stored (no network)
    Status,

    /// Show the signed-in user's profile
    Whoami,
}
