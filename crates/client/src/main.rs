//! `eznotes` -- terminal front end for the EzNotes API.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default                           |
//! |-----------------|----------|-----------------------------------|
//! | `NOTES_API_URL` | no       | `http://localhost:3001/api/notes` |

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eznotes_client::api::DEFAULT_API_URL;
use eznotes_client::command::{Command, HELP};
use eznotes_client::{view, NotesApi, NotesApp};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eznotes_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let api_url = std::env::var("NOTES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    tracing::info!(api_url = %api_url, "Starting eznotes");

    let mut app = NotesApp::new(NotesApi::new(api_url));
    app.refresh().await;
    print!("{}", view::render(app.state()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt("> ");
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::List => {}
            Command::Refresh => app.refresh().await,
            Command::New | Command::Cancel => app.state_mut().cancel_edit(),
            Command::Title(text) => app.state_mut().set_title(text),
            Command::Description(text) => app.state_mut().set_description(text),
            Command::Search(term) => app.state_mut().set_search_term(term),
            Command::Dismiss => {
                app.state_mut().dismiss_error();
                app.state_mut().dismiss_success();
            }
            Command::Save => {
                if app.submit().await.is_none() && !app.state().form().is_submittable() {
                    println!("Title and description are both required.");
                }
            }
            Command::Edit(note_ref) => match note_ref.resolve(app.state()) {
                Some(id) => {
                    app.begin_edit(id);
                }
                None => {
                    println!("No such note.");
                    continue;
                }
            },
            Command::Delete(note_ref) => match note_ref.resolve(app.state()) {
                Some(id) => {
                    app.delete(id, |question| confirm(&mut lines, question)).await;
                }
                None => {
                    println!("No such note.");
                    continue;
                }
            },
        }

        app.state_mut().expire_messages(Instant::now());
        print!("{}", view::render(app.state()));
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Ask a yes/no question on the terminal; anything but `y`/`yes` is a no.
fn confirm<I>(lines: &mut I, question: &str) -> bool
where
    I: Iterator<Item = io::Result<String>>,
{
    prompt(&format!("{question} [y/N] "));
    matches!(
        lines.next(),
        Some(Ok(answer)) if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    )
}
