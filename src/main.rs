use jewelview::api::{self, build_http_client, fetch_all_models, RecommendationApi};
use jewelview::carousel::ProductCard;
use jewelview::config::{self, DEFAULT_HOST, DEFAULT_ITEM_ID, DEFAULT_MODEL, DEFAULT_PORT};
use jewelview::models::{display_name, AppState, ModelFetchResult};
use jewelview::utils::{hostname_from_url, split_csv};

use std::net::SocketAddr;
use std::process;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let client = match build_http_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    AppState::new(RecommendationApi::from_env(client))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {err:?}");
    }
    println!("{}", yansi::Paint::new("Shutdown signal received; stopping server").yellow());
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, endpoint = %state.api.endpoint(), "Starting recommendation demo server");
    let app = jewelview::build_router(state);
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_model_result(result: &ModelFetchResult) {
    let heading = format!("{} - {}", result.model, display_name(&result.model));
    if let Some(error) = result.error() {
        println!("\n{}\n{}", yansi::Paint::new(heading).bold(), yansi::Paint::new(error).red());
        return;
    }
    let products = result.products();
    if products.is_empty() {
        println!("\n{}\n{}", yansi::Paint::new(heading).bold(), yansi::Paint::new("No products found for this model").dim());
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Title", "Brand", "Price", "Rating"]);
    for (i, product) in products.iter().enumerate() {
        let card = ProductCard::from_product(product);
        let price = match (card.current_price_text(), card.original_price_text()) {
            (Some(current), Some(original)) => format!("{} (was {})", current, original),
            (Some(current), None) => current,
            _ => String::new(),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            card.title.clone(),
            card.brand.clone().unwrap_or_default(),
            price,
            card.rating.as_ref().map(|r| r.text()).unwrap_or_default(),
        ]);
    }
    println!(
        "\n{} {}",
        yansi::Paint::new(heading).bold(),
        yansi::Paint::new(format!("({} products)", products.len())).dim()
    );
    println!("{table}");
}

#[derive(Parser)]
#[command(
    name = "jewelview",
    author,
    version,
    about = "Recommendation carousel demo server",
    long_about = r#"jewelview serves a small page that asks the recommendation API for products related to an item and shows each model's results in a carousel.

Examples:
  1) Run the server (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Query from the terminal:
      jewelview recommend 1177646331_multicolor --model B_prod,F_prod
"#,
    after_help = "Use `jewelview <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and API reachability
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Print the effective recommendation endpoint and request recommendations for the sample item once to confirm the API answers.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Fetch recommendations and print them as tables
    #[command(about = "Fetch recommendations for an item", long_about = "Request every listed model in parallel, exactly as the web page does, and print one table per model. Use `--json` to print the result records instead.")]
    Recommend {
        /// Item id to seed the recommendations with
        item_id: String,
        /// Comma-separated model ids
        #[arg(long, short = 'm', default_value = DEFAULT_MODEL)]
        model: String,
        /// Print `{model, data, error}` records as JSON
        #[arg(long)]
        json: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // If no command provided, serve the web app by default
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };
    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            println!("{} {}", yansi::Paint::new("API host:").bold(), hostname_from_url(&state.api.base_url));
            println!("{} {}", yansi::Paint::new("Catalog:").bold(), state.api.catalog_id);
            println!("{} {}", yansi::Paint::new("Endpoint:").bold(), state.api.endpoint());
            match state.api.fetch_model(DEFAULT_MODEL, DEFAULT_ITEM_ID).await {
                Ok(payload) => {
                    println!(
                        "{} ({} products for {} / {})",
                        yansi::Paint::new("Recommendation API reachable").green(),
                        payload.products.len(),
                        DEFAULT_ITEM_ID,
                        DEFAULT_MODEL
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Recommendation API check failed").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Recommend { item_id, model, json, env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let item_id = item_id.trim().to_string();
            if item_id.is_empty() {
                eprintln!("{}", yansi::Paint::new("Please enter an item ID").red());
                process::exit(1);
            }
            let mut models = split_csv(&model);
            if models.is_empty() {
                models.push(DEFAULT_MODEL.to_string());
            }
            let results = match fetch_all_models(&state.api, &item_id, &models).await {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Error fetching data").red(), e);
                    process::exit(1);
                }
            };
            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::new("Failed to serialize results").red(), e);
                        process::exit(1);
                    }
                }
                return;
            }
            println!(
                "{} {} • {} {}",
                yansi::Paint::new("Item ID:").bold(),
                item_id,
                yansi::Paint::new("Models:").bold(),
                models.join(", ")
            );
            for result in &results {
                print_model_result(result);
            }
            println!();
        }
    }
}
