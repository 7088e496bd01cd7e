use clap::{ArgAction, Parser, Subcommand};
use commands::{auth, config, home, lists, movie, movies, review};

mod commands;
mod context;
mod i18n;
mod logging;
mod output;
mod ui;

#[derive(Parser)]
#[command(name = "cinemix")]
#[command(about = "Cinemix - descubra, avalie e organize os seus filmes")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Locale for user-facing text (pt or en; defaults to the configured language)
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,

    /// Remote API root (overrides the config file and CINEMIX_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing shelves (popular and recently added movies)
    #[command(long_about = "Fetch the popular and recently added shelves in one go and render both. This is the command-line counterpart of the site's home page.")]
    Home,

    /// List movies with a chosen ordering
    #[command(long_about = "Fetch one page of the catalogue ordered by popularity, release year, rating or title.")]
    Movies {
        /// Ordering for the list
        #[arg(long, value_enum, default_value = "popular")]
        sort: movies::SortKey,
    },

    /// Show a movie's details, status and reviews
    #[command(long_about = "Fetch a movie by slug together with its reviews. With an active session the watchlist/favorite status is shown as well.")]
    Movie {
        /// Movie slug, as shown in the list views
        slug: String,
    },

    /// Sign in and start a session
    #[command(long_about = "Exchange username and password for an access/refresh token pair, store it, fetch the profile and persist the session. Prompts for anything not passed as a flag.")]
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
    },

    /// Create a new account
    #[command(long_about = "Interactive registration with a live password-requirement checklist. The form only submits once the password meets all requirements and matches its confirmation.")]
    Register,

    /// End the session and forget the stored tokens
    Logout,

    /// Show who is signed in
    Whoami,

    /// Toggle a movie on/off your watchlist
    #[command(long_about = "Flip the watchlist marker for a movie. The new state is shown immediately and reverted if the remote call fails.")]
    Watchlist {
        /// Movie slug
        slug: String,
    },

    /// Toggle a movie on/off your favorites
    #[command(long_about = "Flip the favorite marker for a movie. The new state is shown immediately and reverted if the remote call fails.")]
    Favorite {
        /// Movie slug
        slug: String,
    },

    /// Write a review for a movie
    #[command(long_about = "Submit a star-rated review for a movie. Rating and text are prompted when not passed as flags; one review per movie per user.")]
    Review {
        /// Movie slug
        slug: String,

        /// Star rating, 1 to 5
        #[arg(long)]
        rating: Option<u8>,

        /// Optional review title
        #[arg(long)]
        title: Option<String>,

        /// Review text
        #[arg(long)]
        text: Option<String>,

        /// Mark the review as containing spoilers
        #[arg(long, action = ArgAction::SetTrue)]
        spoiler: bool,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Set the remote API root
    SetUrl {
        /// API root, e.g. https://cinemix.example.com
        url: String,
    },

    /// Set the interface language
    SetLanguage {
        /// One of the supported locales (pt, en)
        language: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let mut ctx = context::AppContext::init(cli.api_url, cli.lang)?;

    match cli.command {
        Commands::Home => home::run_home(&ctx, &output).await,
        Commands::Movies { sort } => movies::run_movies(&ctx, sort, &output).await,
        Commands::Movie { slug } => movie::run_movie(&ctx, &slug, &output).await,
        Commands::Login { username } => auth::run_login(&mut ctx, username, &output).await,
        Commands::Register => auth::run_register(&ctx, &output).await,
        Commands::Logout => auth::run_logout(&mut ctx, &output),
        Commands::Whoami => auth::run_whoami(&ctx, &output),
        Commands::Watchlist { slug } => {
            lists::run_toggle(&ctx, &slug, lists::ToggleKind::Watchlist, &output).await
        }
        Commands::Favorite { slug } => {
            lists::run_toggle(&ctx, &slug, lists::ToggleKind::Favorite, &output).await
        }
        Commands::Review {
            slug,
            rating,
            title,
            text,
            spoiler,
        } => review::run_review(&ctx, &slug, rating, title, text, spoiler, &output).await,
        Commands::Config { cmd } => config::run_config(&ctx, cmd, &output),
    }
}
