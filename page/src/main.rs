//! `user-page` entry-point: hosts the page components in an in-memory
//! document and prints what the containers show.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_page::config::PageSettings;
use user_page::domain::{FormElementIds, FormValidator, LoadOutcome};
use user_page::inbound::document::{MemoryDocument, render_container};
use user_page::outbound::directory::UserDirectoryHttpSource;
use user_page::page::{PageElementIds, on_document_ready};

/// `user-page` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "user-page",
    about = "Load the user directory or validate a registration",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the user directory and print the rendered list.
    Directory,
    /// Submit the registration form with the given values and print the feedback.
    Register {
        /// Username field value.
        #[arg(long, default_value = "")]
        username: String,
        /// Email field value.
        #[arg(long, default_value = "")]
        email: String,
        /// Password field value.
        #[arg(long, default_value = "")]
        password: String,
        /// Print the validation result as JSON instead of the feedback text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(cli.command))
}

async fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Directory => show_directory().await,
        Command::Register {
            username,
            email,
            password,
            json,
        } => register(&username, &email, &password, json),
    }
}

async fn show_directory() -> Result<ExitCode> {
    let settings = PageSettings::load_from_iter([OsString::from("user-page")])
        .map_err(|error| eyre!("load configuration: {error}"))?;
    let endpoint = settings
        .users_endpoint()
        .wrap_err("parse user directory endpoint")?;
    let source = UserDirectoryHttpSource::new(endpoint, settings.request_timeout())
        .wrap_err("build HTTP client")?;

    let document = MemoryDocument::registration_page();
    let ids = PageElementIds::default();
    let page = on_document_ready(&document, &ids, Arc::new(source)).await;

    if let Some(rendered) = document
        .container_state(&ids.results)
        .as_ref()
        .and_then(render_container)
    {
        println!("{rendered}");
    }

    Ok(match page.load {
        Some(LoadOutcome::Rendered { .. }) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn register(username: &str, email: &str, password: &str, json: bool) -> Result<ExitCode> {
    let document = MemoryDocument::registration_page();
    let ids = FormElementIds::default();
    let validator = FormValidator::attach(&document, &ids).wrap_err("attach registration form")?;

    for (id, value) in [
        (&ids.username, username),
        (&ids.email, email),
        (&ids.password, password),
    ] {
        if !document.set_input_value(id, value) {
            return Err(eyre!("input '{id}' is missing from the page"));
        }
    }

    let dispatch = document
        .submit(&ids.form)
        .ok_or_else(|| eyre!("form '{}' is missing from the page", ids.form))?;
    if !dispatch.default_prevented {
        warn!("registration submission was not intercepted");
    }

    let result = validator
        .last_result()
        .ok_or_else(|| eyre!("registration submission was not handled"))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).wrap_err("serialize validation result")?
        );
    } else if let Some(rendered) = document
        .container_state(&ids.feedback)
        .as_ref()
        .and_then(render_container)
    {
        println!("{rendered}");
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
