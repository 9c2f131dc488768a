use clap::Parser;
use contact_form::configuration::get_configuration;
use contact_form::telemetry::{get_subscriber, init_subscriber};
use contact_form::terminal::{run_session, submit_once};
use std::process::ExitCode;
use tokio::io::BufReader;

/// Send a message to the site owner.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Prefill the name field
    #[arg(long)]
    name: Option<String>,

    /// Prefill the email field
    #[arg(long)]
    email: Option<String>,

    /// Prefill the message field
    #[arg(long)]
    message: Option<String>,

    /// Submit once with the prefilled values instead of prompting
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so they never interleave with the prompts.
    let subscriber = get_subscriber("contact-form".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let configuration = get_configuration()?;
    let mut form = configuration.form()?;
    if let Some(name) = cli.name {
        form.set_name(name);
    }
    if let Some(email) = cli.email {
        form.set_email(email);
    }
    if let Some(message) = cli.message {
        form.set_content(message);
    }

    let mut stdout = tokio::io::stdout();
    if cli.once {
        let delivered = submit_once(&mut form, &configuration.contact, &mut stdout).await?;
        return Ok(if delivered {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut form, &configuration.contact, &mut stdin, &mut stdout).await?;
    Ok(ExitCode::SUCCESS)
}
