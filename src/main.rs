use std::error::Error;
use std::io::Write;

use clap::{Parser, ValueEnum};
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_search::{
    HtmlResultsView, InputField, ResultsView, SearchClient, SearchClientBuilder, SearchConfig,
    SearchController, TerminalResultsView,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[derive(Debug, Parser)]
#[command(name = "recipe-search", version, about = "Find recipes by the ingredients you have")]
struct Cli {
    /// Ingredients to search for; prompts interactively when omitted
    ingredients: Vec<String>,

    /// Base URL of the recipe search service
    #[arg(long, env = "RECIPE_SEARCH_SERVER")]
    server: Option<String>,

    /// How results are rendered
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = SearchConfig::load()?;
    if let Some(server) = cli.server.clone() {
        config.base_url = server;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("{:?}", config);

    let client = SearchClientBuilder::from_config(&config).build()?;
    let input = InputField::default();
    let query = (!cli.ingredients.is_empty()).then(|| cli.ingredients.join(" "));

    match cli.format {
        Format::Text => {
            let controller =
                SearchController::new(client, input.clone(), TerminalResultsView::stdout());
            run(controller, input, query, |_| {}).await
        }
        Format::Html => {
            let controller = SearchController::new(client, input.clone(), HtmlResultsView::new());
            run(controller, input, query, |view: &HtmlResultsView| {
                println!("{}", view.to_document_fragment())
            })
            .await
        }
    }
}

/// Run one search for `query`, or prompt for searches until EOF or `quit`
async fn run<V, F>(
    controller: SearchController<SearchClient, InputField, V>,
    input: InputField,
    query: Option<String>,
    show: F,
) -> Result<(), Box<dyn Error>>
where
    V: ResultsView,
    F: Fn(&V),
{
    if let Some(query) = query {
        input.set(query);
        let result = controller.activate().await;
        show(&*controller.view().await);
        result?;
        return Ok(());
    }

    println!("Welcome to the Ingredient-Based Recipe App!");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Enter ingredients (comma-separated): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim_end_matches(['\r', '\n']);
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        input.set(line);
        if let Err(e) = controller.activate().await {
            debug!("search failed: {}", e);
        }
        show(&*controller.view().await);
    }

    Ok(())
}
