use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use movie_catalog_app::{init_logging, resolve_credentials, store_credentials, AppContext, CredentialUpdate};
use movie_catalog_config::{Config, Credentials, PathManager};
use movie_catalog_core::{top_rated, FeedSection, ViewScope};
use movie_catalog_models::{Category, ImageSize, Movie, TrendingWindow};
use movie_catalog_sources::{ImageUrlBuilder, MovieCatalog, ACTION_GENRE_ID, MARVEL_STUDIOS_COMPANY_ID};

#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Browse the movie catalog from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all logs except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the home shelves (trending, popular, top rated, upcoming, now playing)
    Home {
        /// Number of highlights shown above the shelves
        #[arg(long, default_value_t = 5)]
        highlights: usize,
    },
    /// Trending movies for a day or week window
    Trending {
        #[arg(long, value_enum, default_value_t = WindowArg::Week)]
        window: WindowArg,
    },
    /// Popular movies in a browse category
    Discover {
        #[arg(value_enum, default_value_t = CategoryArg::All)]
        category: CategoryArg,
    },
    /// Popular movies from one production company
    Studio {
        #[arg(long, default_value_t = MARVEL_STUDIOS_COMPANY_ID)]
        company: u64,
    },
    /// Popular action movies
    Action,
    /// Full details of one movie
    Details { id: u64 },
    /// Genre names known to the catalog
    Genres,
    /// Store catalog credentials in credentials.toml
    Credentials {
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        access_token: Option<String>,

        /// Remove stored credentials before applying the others
        #[arg(long, action = ArgAction::SetTrue)]
        clear: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WindowArg {
    Day,
    Week,
}

impl From<WindowArg> for TrendingWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Day => TrendingWindow::Day,
            WindowArg::Week => TrendingWindow::Week,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    All,
    Romance,
    Crime,
    Kids,
    Horror,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => Category::All,
            CategoryArg::Romance => Category::Romance,
            CategoryArg::Crime => Category::Crime,
            CategoryArg::Kids => Category::Kids,
            CategoryArg::Horror => Category::Horror,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("{}", e))
        .wrap_err("Failed to load configuration")?;

    let log_file = config.logging.log_file(&paths);
    if log_file.is_some() {
        paths.ensure_directories().map_err(|e| eyre!("{}", e))?;
    }
    init_logging(&config.logging, log_file.as_deref(), cli.verbose, cli.quiet).map_err(|e| eyre!("{}", e))?;

    let command = match cli.command {
        Commands::Credentials { api_key, access_token, clear } => {
            let update = CredentialUpdate { api_key, access_token, clear };
            let stored = store_credentials(&paths, update).map_err(|e| eyre!("{:#}", e))?;
            println!(
                "Credentials saved to {} (api key: {}, access token: {})",
                paths.credentials_file().display(),
                if stored.api_key.is_some() { "set" } else { "unset" },
                if stored.access_token.is_some() { "set" } else { "unset" },
            );
            return Ok(());
        }
        command => command,
    };

    let credentials = resolve_credentials(&paths, Credentials::from_env()).map_err(|e| eyre!("{:#}", e))?;
    let ctx = AppContext::start(config, credentials).map_err(|e| eyre!("{:#}", e))?;

    let result = run(&ctx, command, cli.json).await;
    ctx.shutdown();
    result
}

async fn run(ctx: &AppContext, command: Commands, json: bool) -> color_eyre::Result<()> {
    let catalog = ctx.catalog();
    let images = ctx.images();

    match command {
        Commands::Home { highlights } => {
            let scope = ViewScope::new();
            let mut popular = Vec::new();

            let summary = ctx
                .load_home(&scope.guard(), |section, result| match result {
                    Ok(movies) => {
                        if section == FeedSection::Popular {
                            popular = movies.clone();
                        }
                        print_movies(&section.title(), &movies, images, json);
                    }
                    Err(e) => eprintln!("{}: {}", section.title(), e),
                })
                .await;

            if !popular.is_empty() {
                print_movies("Highlights", &top_rated(popular, highlights), images, json);
            }
            if summary.loaded == 0 && summary.failed > 0 {
                return Err(eyre!("No home section could be loaded"));
            }
        }
        Commands::Trending { window } => {
            let movies = catalog.fetch_trending(window.into()).await?;
            print_movies("Trending", &movies, images, json);
        }
        Commands::Discover { category } => {
            let category = Category::from(category);
            let movies = catalog.fetch_by_category(category).await?;
            print_movies(category.label(), &movies, images, json);
        }
        Commands::Studio { company } => {
            let movies = catalog.fetch_by_company(company).await?;
            print_movies(&format!("Studio {}", company), &movies, images, json);
        }
        Commands::Action => {
            let movies = catalog.fetch_by_genre(Some(ACTION_GENRE_ID)).await?;
            print_movies("Action", &movies, images, json);
        }
        Commands::Details { id } => {
            let details = catalog
                .fetch_details(id)
                .await
                .wrap_err_with(|| format!("Could not load movie {}", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{}", details.movie.title);
                if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
                    println!("  {}", tagline);
                }
                println!("  Rating: {:.1}", details.movie.vote_average);
                if let Some(runtime) = details.runtime_label() {
                    println!("  Runtime: {}", runtime);
                }
                println!("  Genres: {}", details.genre_names().join(", "));
                println!("  Backdrop: {}", images.backdrop_url(&details.movie, ImageSize::W780));
                if !details.movie.overview.is_empty() {
                    println!("\n{}", details.movie.overview);
                }
            }
        }
        Commands::Genres => {
            let genres = catalog.fetch_genre_catalog().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(genres.genres())?);
            } else {
                for genre in genres.genres() {
                    println!("{:>6}  {}", genre.id, genre.name);
                }
            }
        }
        Commands::Credentials { .. } => {
            return Err(eyre!("Credentials are stored without starting the catalog client"));
        }
    }

    Ok(())
}

fn print_movies(title: &str, movies: &[Movie], images: &ImageUrlBuilder, json: bool) {
    if json {
        let value = serde_json::json!({ "section": title, "movies": movies });
        println!("{}", value);
        return;
    }

    println!("== {} ({}) ==", title, movies.len());
    for movie in movies {
        let year = movie
            .release_year()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        println!(
            "  {:>8}  {}{}  {:.1}  {}",
            movie.id,
            movie.title,
            year,
            movie.vote_average,
            images.card_image_url(movie, ImageSize::W185)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["movie-catalog", "--json", "discover", "horror"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Discover { category: CategoryArg::Horror }));

        let cli = Cli::try_parse_from(["movie-catalog", "credentials", "--api-key", "k", "--clear"]).unwrap();
        match cli.command {
            Commands::Credentials { api_key, access_token, clear } => {
                assert_eq!(api_key.as_deref(), Some("k"));
                assert_eq!(access_token, None);
                assert!(clear);
            }
            _ => panic!("expected credentials command"),
        }

        let cli = Cli::try_parse_from(["movie-catalog", "studio"]).unwrap();
        assert!(matches!(cli.command, Commands::Studio { company: MARVEL_STUDIOS_COMPANY_ID }));
    }
}
