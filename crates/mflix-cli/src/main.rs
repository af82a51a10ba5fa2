//! mflix - MFlix movie catalog API CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use mflix_api::{LocalMflixApi, MflixClient, PageParams, SearchParams};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Base URL of the MFlix API server (overrides config).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show API server metadata.
    Info,
    /// Query movies.
    Movies(MoviesCommand),
    /// Query embedded movies (plot-vector variants).
    EmbeddedMovies(EmbeddedMoviesCommand),
    /// Query comments.
    Comments(CommentsCommand),
    /// Query users.
    Users(UsersCommand),
    /// Query theaters.
    Theaters(TheatersCommand),
    /// Query sessions.
    Sessions(SessionsCommand),
    /// Exercise every endpoint in sequence against a live server.
    Demo,
}

/// Pagination arguments for list subcommands.
#[derive(clap::Args)]
struct PageArgs {
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Items per page.
    #[arg(long, default_value_t = 10)]
    limit: u32,
}

/// Record ID argument for get subcommands.
#[derive(clap::Args)]
struct IdArgs {
    /// Record ID (Mongo ObjectId string).
    #[arg(long, required = true)]
    id: String,
}

/// Search filter arguments.
#[derive(clap::Args)]
struct SearchArgs {
    /// Filter by title (server-side regex match).
    #[arg(long)]
    title: Option<String>,

    /// Filter by genre.
    #[arg(long)]
    genre: Option<String>,

    /// Filter by release year.
    #[arg(long)]
    year: Option<u32>,
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesCommand {
    /// Movies subcommand to run.
    #[command(subcommand)]
    command: MoviesSubcommands,
}

/// Available movies subcommands.
#[derive(Subcommand)]
enum MoviesSubcommands {
    /// List movies with pagination.
    List(PageArgs),
    /// Get a movie by ID.
    Get(IdArgs),
    /// Search movies by title, genre, and/or year.
    Search(SearchArgs),
}

/// Arguments for the `embedded-movies` subcommand.
#[derive(clap::Args)]
struct EmbeddedMoviesCommand {
    /// Embedded-movies subcommand to run.
    #[command(subcommand)]
    command: EmbeddedMoviesSubcommands,
}

/// Available embedded-movies subcommands.
#[derive(Subcommand)]
enum EmbeddedMoviesSubcommands {
    /// List embedded movies with pagination.
    List(PageArgs),
    /// Get an embedded movie by ID.
    Get(IdArgs),
    /// Search embedded movies by title, genre, and/or year.
    Search(SearchArgs),
}

/// Arguments for the `comments` subcommand.
#[derive(clap::Args)]
struct CommentsCommand {
    /// Comments subcommand to run.
    #[command(subcommand)]
    command: CommentsSubcommands,
}

/// Available comments subcommands.
#[derive(Subcommand)]
enum CommentsSubcommands {
    /// List comments with pagination.
    List(PageArgs),
    /// Get a comment by ID.
    Get(IdArgs),
    /// List all comments for one movie.
    ByMovie(IdArgs),
}

/// Arguments for the `users` subcommand.
#[derive(clap::Args)]
struct UsersCommand {
    /// Users subcommand to run.
    #[command(subcommand)]
    command: UsersSubcommands,
}

/// Available users subcommands.
#[derive(Subcommand)]
enum UsersSubcommands {
    /// List users with pagination.
    List(PageArgs),
    /// Get a user by ID.
    Get(IdArgs),
}

/// Arguments for the `theaters` subcommand.
#[derive(clap::Args)]
struct TheatersCommand {
    /// Theaters subcommand to run.
    #[command(subcommand)]
    command: TheatersSubcommands,
}

/// Available theaters subcommands.
#[derive(Subcommand)]
enum TheatersSubcommands {
    /// List theaters with pagination.
    List(PageArgs),
    /// Get a theater by ID.
    Get(IdArgs),
}

/// Arguments for the `sessions` subcommand.
#[derive(clap::Args)]
struct SessionsCommand {
    /// Sessions subcommand to run.
    #[command(subcommand)]
    command: SessionsSubcommands,
}

/// Available sessions subcommands.
#[derive(Subcommand)]
enum SessionsSubcommands {
    /// List sessions with pagination.
    List(PageArgs),
    /// Get a session by ID.
    Get(IdArgs),
}

impl PageArgs {
    /// Converts CLI pagination arguments to API parameters.
    const fn to_params(&self) -> PageParams {
        PageParams::new(self.page, self.limit)
    }
}

impl SearchArgs {
    /// Converts CLI search arguments to API parameters.
    fn to_params(&self) -> SearchParams {
        SearchParams {
            title: self.title.clone(),
            genre: self.genre.clone(),
            year: self.year,
        }
    }
}

/// Resolves the base URL: CLI flag first, then config file, then the
/// library default.
fn resolve_base_url(flag: Option<String>, dir: Option<&PathBuf>) -> Result<Option<String>> {
    if flag.is_some() {
        return Ok(flag);
    }

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    if let Some(url) = config.api.base_url {
        tracing::debug!("Using base URL from config: {url}");
        return Ok(Some(url));
    }
    Ok(None)
}

/// Builds the API client from the resolved base URL.
fn build_client(base_url: Option<String>, dir: Option<&PathBuf>) -> Result<MflixClient> {
    let mut builder = MflixClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(url) = resolve_base_url(base_url, dir)? {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build API client")
}

/// Picks a human-readable label for one record.
fn item_label(item: &Value) -> String {
    if let Some(s) = item
        .get("title")
        .or_else(|| item.get("name"))
        .or_else(|| item.get("email"))
        .or_else(|| item.get("user_id"))
        .and_then(Value::as_str)
    {
        return String::from(s);
    }
    item.get("theaterId")
        .and_then(Value::as_u64)
        .map_or_else(|| String::from("-"), |id| id.to_string())
}

/// Logs a paginated response: one summary line plus one line per item.
fn print_page(response: &Value, items_key: &str, total_key: &str) {
    let items = response.get(items_key).and_then(Value::as_array);

    tracing::info!(
        "Page {}/{} ({}: {}, showing {})",
        response.get("currentPage").and_then(serde_json::Value::as_u64).unwrap_or(0),
        response.get("totalPages").and_then(serde_json::Value::as_u64).unwrap_or(0),
        total_key,
        response.get(total_key).and_then(serde_json::Value::as_u64).unwrap_or(0),
        items.map_or(0, Vec::len),
    );

    if let Some(items) = items {
        for item in items {
            tracing::info!(
                "{}\t{}",
                item.get("_id").and_then(serde_json::Value::as_str).unwrap_or("-"),
                item_label(item),
            );
        }
    }
}

/// Logs a bare-array response (search and by-movie endpoints).
fn print_results(response: &Value) {
    if let Some(items) = response.as_array() {
        for item in items {
            tracing::info!(
                "{}\t{}",
                item.get("_id").and_then(serde_json::Value::as_str).unwrap_or("-"),
                item_label(item),
            );
        }
        tracing::info!("Total: {} results", items.len());
    }
}

/// Logs a full record as pretty-printed JSON.
fn print_record(value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("failed to format response")?;
    for line in pretty.lines() {
        tracing::info!("{line}");
    }
    Ok(())
}

/// Runs the `info` subcommand.
#[instrument(skip_all)]
async fn run_info(client: &MflixClient) -> Result<()> {
    let info = client
        .get_api_info()
        .await
        .context("failed to fetch API info")?;
    print_record(&info)
}

/// Runs the `movies` subcommands.
#[instrument(skip_all)]
async fn run_movies(client: &MflixClient, cmd: &MoviesCommand) -> Result<()> {
    match &cmd.command {
        MoviesSubcommands::List(args) => {
            let response = client
                .get_all_movies(&args.to_params())
                .await
                .context("failed to fetch movies")?;
            print_page(&response, "movies", "totalMovies");
            Ok(())
        }
        MoviesSubcommands::Get(args) => {
            let movie = client
                .get_movie_by_id(&args.id)
                .await
                .context("failed to fetch movie")?;
            print_record(&movie)
        }
        MoviesSubcommands::Search(args) => {
            let results = client
                .search_movies(&args.to_params())
                .await
                .context("movie search failed")?;
            print_results(&results);
            Ok(())
        }
    }
}

/// Runs the `embedded-movies` subcommands.
#[instrument(skip_all)]
async fn run_embedded_movies(client: &MflixClient, cmd: &EmbeddedMoviesCommand) -> Result<()> {
    match &cmd.command {
        EmbeddedMoviesSubcommands::List(args) => {
            let response = client
                .get_all_embedded_movies(&args.to_params())
                .await
                .context("failed to fetch embedded movies")?;
            print_page(&response, "embeddedMovies", "totalEmbeddedMovies");
            Ok(())
        }
        EmbeddedMoviesSubcommands::Get(args) => {
            let movie = client
                .get_embedded_movie_by_id(&args.id)
                .await
                .context("failed to fetch embedded movie")?;
            print_record(&movie)
        }
        EmbeddedMoviesSubcommands::Search(args) => {
            let results = client
                .search_embedded_movies(&args.to_params())
                .await
                .context("embedded movie search failed")?;
            print_results(&results);
            Ok(())
        }
    }
}

/// Runs the `comments` subcommands.
#[instrument(skip_all)]
async fn run_comments(client: &MflixClient, cmd: &CommentsCommand) -> Result<()> {
    match &cmd.command {
        CommentsSubcommands::List(args) => {
            let response = client
                .get_all_comments(&args.to_params())
                .await
                .context("failed to fetch comments")?;
            print_page(&response, "comments", "totalComments");
            Ok(())
        }
        CommentsSubcommands::Get(args) => {
            let comment = client
                .get_comment_by_id(&args.id)
                .await
                .context("failed to fetch comment")?;
            print_record(&comment)
        }
        CommentsSubcommands::ByMovie(args) => {
            let comments = client
                .get_comments_by_movie(&args.id)
                .await
                .context("failed to fetch comments for movie")?;
            print_results(&comments);
            Ok(())
        }
    }
}

/// Runs the `users` subcommands.
#[instrument(skip_all)]
async fn run_users(client: &MflixClient, cmd: &UsersCommand) -> Result<()> {
    match &cmd.command {
        UsersSubcommands::List(args) => {
            let response = client
                .get_all_users(&args.to_params())
                .await
                .context("failed to fetch users")?;
            print_page(&response, "users", "totalUsers");
            Ok(())
        }
        UsersSubcommands::Get(args) => {
            let user = client
                .get_user_by_id(&args.id)
                .await
                .context("failed to fetch user")?;
            print_record(&user)
        }
    }
}

/// Runs the `theaters` subcommands.
#[instrument(skip_all)]
async fn run_theaters(client: &MflixClient, cmd: &TheatersCommand) -> Result<()> {
    match &cmd.command {
        TheatersSubcommands::List(args) => {
            let response = client
                .get_all_theaters(&args.to_params())
                .await
                .context("failed to fetch theaters")?;
            print_page(&response, "theaters", "totalTheaters");
            Ok(())
        }
        TheatersSubcommands::Get(args) => {
            let theater = client
                .get_theater_by_id(&args.id)
                .await
                .context("failed to fetch theater")?;
            print_record(&theater)
        }
    }
}

/// Runs the `sessions` subcommands.
#[instrument(skip_all)]
async fn run_sessions(client: &MflixClient, cmd: &SessionsCommand) -> Result<()> {
    match &cmd.command {
        SessionsSubcommands::List(args) => {
            let response = client
                .get_all_sessions(&args.to_params())
                .await
                .context("failed to fetch sessions")?;
            print_page(&response, "sessions", "totalSessions");
            Ok(())
        }
        SessionsSubcommands::Get(args) => {
            let session = client
                .get_session_by_id(&args.id)
                .await
                .context("failed to fetch session")?;
            print_record(&session)
        }
    }
}

/// Runs the `demo` subcommand.
///
/// Mirrors the read-only endpoint tour: metadata, one page of each
/// collection, a title search, then a movie drill-down seeded from the
/// first page of movies.
#[instrument(skip_all)]
async fn run_demo(client: &MflixClient) -> Result<()> {
    tracing::info!("=== MFlix API demo ===");

    tracing::info!("1. API info");
    let info = client
        .get_api_info()
        .await
        .context("failed to fetch API info")?;
    tracing::info!(
        "API: {} (version {})",
        info.get("message").and_then(serde_json::Value::as_str).unwrap_or("unknown"),
        info.get("version").and_then(serde_json::Value::as_str).unwrap_or("unknown"),
    );

    tracing::info!("2. Movies (page 1, limit 5)");
    let movies = client
        .get_all_movies(&PageParams::new(1, 5))
        .await
        .context("failed to fetch movies")?;
    print_page(&movies, "movies", "totalMovies");

    tracing::info!("3. Movies with \"Star\" in the title");
    let results = client
        .search_movies(&SearchParams::new().title("Star"))
        .await
        .context("movie search failed")?;
    tracing::info!(
        "Found {} matching movies",
        results.as_array().map_or(0, Vec::len)
    );

    tracing::info!("4. Embedded movies (page 1, limit 3)");
    let embedded = client
        .get_all_embedded_movies(&PageParams::new(1, 3))
        .await
        .context("failed to fetch embedded movies")?;
    print_page(&embedded, "embeddedMovies", "totalEmbeddedMovies");

    tracing::info!("5. Comments (page 1, limit 3)");
    let comments = client
        .get_all_comments(&PageParams::new(1, 3))
        .await
        .context("failed to fetch comments")?;
    print_page(&comments, "comments", "totalComments");

    tracing::info!("6. Users (page 1, limit 3)");
    let users = client
        .get_all_users(&PageParams::new(1, 3))
        .await
        .context("failed to fetch users")?;
    print_page(&users, "users", "totalUsers");

    tracing::info!("7. Theaters (page 1, limit 3)");
    let theaters = client
        .get_all_theaters(&PageParams::new(1, 3))
        .await
        .context("failed to fetch theaters")?;
    print_page(&theaters, "theaters", "totalTheaters");

    tracing::info!("8. Sessions (page 1, limit 3)");
    let sessions = client
        .get_all_sessions(&PageParams::new(1, 3))
        .await
        .context("failed to fetch sessions")?;
    print_page(&sessions, "sessions", "totalSessions");

    // Drill into the first movie of the listing, when there is one.
    if let Some(movie_id) = movies
        .get("movies")
        .and_then(Value::as_array)
        .and_then(|m| m.first())
        .and_then(|m| m.get("_id"))
        .and_then(Value::as_str)
    {
        tracing::info!("9. Movie {movie_id}");
        let movie = client
            .get_movie_by_id(movie_id)
            .await
            .context("failed to fetch movie")?;
        tracing::info!(
            "Title: {} ({})",
            movie.get("title").and_then(serde_json::Value::as_str).unwrap_or("unknown"),
            movie.get("year").and_then(serde_json::Value::as_u64).unwrap_or(0),
        );

        tracing::info!("10. Comments for movie {movie_id}");
        let movie_comments = client
            .get_comments_by_movie(movie_id)
            .await
            .context("failed to fetch comments for movie")?;
        tracing::info!(
            "Comments for this movie: {}",
            movie_comments.as_array().map_or(0, Vec::len)
        );
    }

    tracing::info!("=== Demo completed ===");
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let Cli {
        base_url,
        dir,
        command,
    } = Cli::parse();
    let client = build_client(base_url, dir.as_ref())?;

    match command {
        Commands::Info => run_info(&client).await,
        Commands::Movies(cmd) => run_movies(&client, &cmd).await,
        Commands::EmbeddedMovies(cmd) => run_embedded_movies(&client, &cmd).await,
        Commands::Comments(cmd) => run_comments(&client, &cmd).await,
        Commands::Users(cmd) => run_users(&client, &cmd).await,
        Commands::Theaters(cmd) => run_theaters(&client, &cmd).await,
        Commands::Sessions(cmd) => run_sessions(&client, &cmd).await,
        Commands::Demo => run_demo(&client).await,
    }
}
