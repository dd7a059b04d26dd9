use clap::{Parser, Subcommand};

mod application;
mod domain;
mod infrastructure;

use application::bindings::Trigger;
use application::panel::ChatPanel;
use application::services::ChatSession;
use domain::traits::{ChatBackend, Renderer};
use infrastructure::adapters::console::{ConsoleAdapter, LocalCommand};
use infrastructure::config::Config;
use infrastructure::http::HttpBackend;

#[derive(Parser)]
#[command(name = "medichat")]
#[command(about = "Terminal client for the medical chatbot endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Chatbot ask endpoint (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_chat(cli.config, cli.endpoint);
        }
        Commands::Version => {
            println!("medichat v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_chat(config_path: String, endpoint_override: Option<String>) {
    // Load config
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(endpoint) = endpoint_override {
        config.server.endpoint = endpoint;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // A bad endpoint fails here, before any message is typed
    let backend = match HttpBackend::new(&config.server.endpoint) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Invalid endpoint: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting {} against {}",
        config.client.name,
        config.server.endpoint
    );

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let panel = ChatPanel::new(config.client.viewport_rows);
        let mut session = ChatSession::new(panel, backend, ConsoleAdapter::new());
        run_console_chat(&mut session).await;
    });
}

async fn run_console_chat<B: ChatBackend, R: Renderer>(session: &mut ChatSession<B, R>) {
    println!("Type a message and press Enter. /help for commands.");

    // Main loop: one line per trigger, one send flow at a time
    loop {
        let Some(line) = ConsoleAdapter::new().read_line("you> ").await else {
            break;
        };

        match ConsoleAdapter::local_command(&line) {
            Some(LocalCommand::Quit) => break,
            Some(LocalCommand::Version) => {
                println!("medichat v{}", env!("CARGO_PKG_VERSION"));
            }
            Some(LocalCommand::Help) => {
                println!("/help - Show this message");
                println!("/version - Show client version");
                println!("/quit - Leave the chat");
                println!("Anything else is sent to the chatbot.");
            }
            None => {
                session.input_mut().set(line);
                session.trigger(Trigger::EnterKey).await;
            }
        }
    }

    tracing::info!("Session closed after {} messages", session.panel().len());
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
}
