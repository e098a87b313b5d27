//! Form submission commands
//!
//! Writes go to the content API only. A failure is reported with a hint to
//! retry or email the center; nothing is queued or replayed.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::{ContactArgs, GlobalOptions, InternshipArgs, SubmissionArgs, SubscribeArgs};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::ContentApi;
use crate::client::models::Acknowledgement;
use crate::error::{ApiError, Result};
use crate::output::json::{JsonOutput, format_output};

/// Address shown when a submission cannot be delivered.
pub const CENTER_EMAIL: &str = "gcadr@gnlu.ac.in";

/// Run the contact send command
pub async fn contact(opts: &GlobalOptions, args: &ContactArgs) -> Result<()> {
    let form = args.to_form();
    form.validate()?;

    let mut summary = vec![
        format!("From:    {} <{}>", form.name, form.email),
        format!("Message: {} characters", form.message.chars().count()),
    ];
    if !form.subject.is_empty() {
        summary.insert(1, format!("Subject: {}", form.subject));
    }
    if !confirm("Send this message?", &summary, args.yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    send(&ctx, "Contact message", ctx.loader.submit_contact(&form)).await
}

/// Run the newsletter subscribe command
pub async fn subscribe(opts: &GlobalOptions, args: &SubscribeArgs) -> Result<()> {
    let signup = args.to_signup();
    signup.validate()?;

    let ctx = CommandContext::new(opts).await?;
    send(
        &ctx,
        "Newsletter subscription",
        ctx.loader.subscribe_newsletter(&signup),
    )
    .await
}

/// Run the internship apply command
pub async fn internship(opts: &GlobalOptions, args: &InternshipArgs) -> Result<()> {
    let application = args.to_application();
    application.validate()?;

    let summary = vec![
        format!(
            "Applicant: {} <{}>",
            application.applicant_name, application.applicant_email
        ),
        format!(
            "Studying:  {}, {} ({})",
            application.course, application.university, application.year
        ),
        format!(
            "Period:    {} to {}",
            application.proposed_start_date, application.proposed_end_date
        ),
        format!("CV:        {}", application.cv.display()),
        format!("Sample:    {}", application.writing_sample.display()),
    ];
    if !confirm("Submit this application?", &summary, args.yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    send(
        &ctx,
        "Internship application",
        ctx.loader.apply_internship(&application),
    )
    .await
}

/// Run the submission send command
pub async fn submission(opts: &GlobalOptions, args: &SubmissionArgs) -> Result<()> {
    let manuscript = args.to_submission().await.map_err(|e| {
        ApiError::InvalidRequest(format!("Cannot read manuscript: {}", e))
    })?;
    manuscript.validate()?;

    let summary = vec![
        format!("Type:   {}", manuscript.submission_type),
        format!("Title:  {}", manuscript.title),
        format!(
            "Author: {} <{}>",
            manuscript.author_name, manuscript.author_email
        ),
        format!("Length: {} words", manuscript.content.split_whitespace().count()),
    ];
    if !confirm("Submit this manuscript?", &summary, args.yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    send(&ctx, "Submission", ctx.loader.submit_manuscript(&manuscript)).await
}

/// Show the summary and ask for confirmation. Skipped with `--yes` or when
/// stdin is not a terminal.
fn confirm(prompt: &str, summary: &[String], yes: bool) -> Result<bool> {
    if yes || !std::io::stdin().is_terminal() {
        return Ok(true);
    }

    for line in summary {
        eprintln!("  {}", line);
    }
    eprintln!();

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}

/// Await a write behind a spinner and report the outcome.
async fn send<Fut>(ctx: &CommandContext, label: &str, request: Fut) -> Result<()>
where
    Fut: Future<Output = Result<Acknowledgement>>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Sending {}...", label.to_lowercase()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = request.await;
    spinner.finish_and_clear();

    match outcome {
        Ok(ack) => print_ack(ctx.format, label, &ack),
        Err(e) => {
            eprintln!("{} {} was not sent", "✗".red(), label);
            eprintln!(
                "  → Please try again, or contact us directly at {}",
                CENTER_EMAIL.cyan()
            );
            Err(e)
        }
    }
}

fn print_ack(format: OutputFormat, label: &str, ack: &Acknowledgement) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", format_output(&JsonOutput::new(ack))?);
        }
        _ => {
            println!("{} {}: {}", "✓".green(), label, ack.message);
            if let Some(ref reference) = ack.reference_number {
                println!("  Reference number: {}", reference.bold());
            }
        }
    }
    Ok(())
}
