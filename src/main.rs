use clap::{Parser, Subcommand};
use postboard::api::PostDraft;
use postboard::core::action::{Action, Effect, update};
use postboard::core::config::{self, ResolvedConfig};
use postboard::core::dispatcher::{Request, RequestDispatcher};
use postboard::core::state::{App, HandlerState};
use postboard::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "postboard", version, about = "Buttons and forms for a placeholder posts API")]
struct Args {
    /// Base URL of the posts API (overrides config file and POSTBOARD_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the result as HTML instead of plain text (one-shot commands only)
    #[arg(long, global = true)]
    html: bool,

    /// Run a single request and print the result; omit to start the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// GET the configured fetch post (promise-style transport)
    Fetch,
    /// GET the configured XHR post (callback-style transport)
    Xhr,
    /// POST a new post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// PUT an update to an existing post
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

impl From<Command> for Request {
    fn from(command: Command) -> Self {
        match command {
            Command::Fetch => Request::FetchPost,
            Command::Xhr => Request::XhrPost,
            Command::Create { title, body } => Request::CreatePost(PostDraft::new(title, body)),
            Command::Update { id, title, body } => Request::UpdatePost {
                id,
                draft: PostDraft::new(title, body),
            },
        }
    }
}

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().map_err(io::Error::other)?;
    let resolved = config::resolve(&file_config, args.base_url.as_deref()).map_err(io::Error::other)?;

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Postboard starting up against {}", resolved.base_url);

    match args.command {
        Some(command) => run_once(&resolved, command.into(), args.html).await,
        None => tui::run(&resolved).map(|()| ExitCode::SUCCESS),
    }
}

/// Runs one handler through the same reducer the TUI uses and prints the
/// output region.
async fn run_once(config: &ResolvedConfig, request: Request, html: bool) -> io::Result<ExitCode> {
    let dispatcher = RequestDispatcher::new(config);
    let mut app = App::from_config(config);
    let handler = request.handler();

    if let Effect::Dispatch(request) = update(&mut app, Action::Trigger(request)) {
        let completion = dispatcher.perform(request).await;
        update(&mut app, completion);
    }

    let rendered = if html {
        app.output.to_html()
    } else {
        app.output.to_plain_text()
    };
    println!("{rendered}");

    Ok(match app.handler_state(handler) {
        HandlerState::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
