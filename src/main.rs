use std::sync::Arc;

use dotenvy::dotenv;
use log::info;

use deskconsole::config::AppConfig;
use deskconsole::session::AssistSession;
use deskconsole::shared::state::AppState;

const USAGE: &str = "Usage: deskconsole [--noui]\n\n  --noui    print a scripted demo transcript instead of starting the TUI\n  --help    show this message";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let no_ui = args.iter().any(|a| a == "--noui");
    for arg in &args[1..] {
        if arg != "--noui" {
            eprintln!("Unknown command: {}", arg);
            eprintln!("Run 'deskconsole --help' for usage information");
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown command: {}", arg),
            ));
        }
    }

    dotenv().ok();
    let config = AppConfig::from_env().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Config error: {}", e))
    })?;
    let state = Arc::new(AppState::new(config));

    if no_ui {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(state.config.console.log_filter.clone()),
        )
        .init();
        return run_headless(state).await.map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Demo failed: {}", e))
        });
    }

    #[cfg(feature = "console")]
    {
        let ui_state = state.clone();
        let ui = tokio::task::spawn_blocking(move || deskconsole::console::start_ui(ui_state));
        ui.await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    }
    #[cfg(not(feature = "console"))]
    {
        eprintln!("Built without the console feature; run with --noui");
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "console feature disabled",
        ))
    }
}

/// Walk the seeded ticket queue and print each assist outcome, honoring the
/// configured artificial delay.
async fn run_headless(state: Arc<AppState>) -> anyhow::Result<()> {
    info!(
        "running scripted demo over {} tickets (answer delay {} ms)",
        state.tickets.len(),
        state.config.assist.answer_delay_ms
    );
    let mut session = AssistSession::new(state.clone());
    let ids: Vec<String> = state.tickets.iter().map(|t| t.id.clone()).collect();

    for id in ids {
        if !session.select_ticket(&id) {
            continue;
        }
        session.wait_ready().await;

        let Some(ticket) = session.selected_ticket.as_ref() else {
            continue;
        };
        println!("=== {} · {}", ticket.id, ticket.subject);
        println!(
            "    {} <{}> | {} | {} | tags: {}",
            ticket.requester_name,
            ticket.requester_email,
            ticket.status,
            ticket.priority,
            ticket.tags.join(", ")
        );
        println!("    query: {}", ticket.query);
        if let Some(answer) = session.answer.as_ref() {
            println!();
            println!("--- assistant answer");
            println!("{}", answer.content);
            println!("--- sources");
            for (idx, citation) in answer.citations.iter().enumerate() {
                println!("  [{}] {} ({})", idx + 1, citation.source, citation.source_id);
            }
        }
        println!("--- related documents");
        for result in &session.results {
            println!("  {:>3}% {} [{}]", result.relevance, result.title, result.kind);
        }
        println!();
    }
    Ok(())
}
