mod cli;

use std::rc::Rc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{self, LocalSet};
use tracing::{debug, info};

use jugaad_chat::input::SUGGESTIONS;
use jugaad_chat::{InputController, InputEvent, InputField, Orchestrator, SubmitOutcome};

use crate::cli::config::{Cli, Settings};
use crate::cli::http::HttpBackend;
use crate::cli::tasks::Submissions;
use crate::cli::terminal::{LineField, TerminalTranscript};
use crate::cli::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the transcript
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jugaad=info,jugaad_chat=info".into()),
        )
        .init();

    let settings = Settings::from(Cli::parse());
    info!("Talking to {}", settings.api_base);

    // ── Pipeline wiring ───────────────────────────────────────────────────────
    let backend = HttpBackend::new(&settings)?;
    let orchestrator = Rc::new(Orchestrator::new(
        backend,
        TerminalTranscript::new(std::io::stdout()),
    ));
    let controller = Rc::new(InputController::new(orchestrator.clone(), LineField::default()));

    // The pipeline is single-threaded; every task runs on this LocalSet.
    let local = LocalSet::new();
    local
        .run_until(async move {
            let greeting = settings.greet.then(|| {
                let orchestrator = orchestrator.clone();
                task::spawn_local(async move { orchestrator.send_greeting_request().await })
            });

            let mut submissions = Submissions::default();
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::ListSuggestions => {
                        for (i, text) in SUGGESTIONS.iter().enumerate() {
                            println!("  /{} {text}", i + 1);
                        }
                    }
                    Command::Suggestion(text) => {
                        controller.handle(InputEvent::Suggestion(text.to_string())).await;
                        println!("> {text}  (press Enter to send)");
                    }
                    Command::Send(text) => {
                        if !text.trim().is_empty() {
                            controller.input().set_value(&text);
                        }
                        let controller = controller.clone();
                        submissions.spawn(async move {
                            if controller.handle(InputEvent::FormSubmit).await
                                == Some(SubmitOutcome::DroppedBusy)
                            {
                                debug!("Still waiting for the previous reply");
                            }
                        });
                        // Let the submission read and clear the input before
                        // the next buffered line overwrites it.
                        task::yield_now().await;
                    }
                }
            }

            // Stdin closed: let outstanding replies land before exiting.
            if let Some(greeting) = greeting {
                greeting.await?;
            }
            submissions.join_all().await?;
            Ok::<_, anyhow::Error>(())
        })
        .await
}
