//! The `calltally` binary: walks the paginated call-log API, aggregates
//! extracted event codes into a day-of-month histogram, writes the CSV
//! report and audit dump, and emails the report as a base64 attachment.

mod args;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use calltally_core::{render_report, write_text_atomic};
use calltally_mailer::{
    package_report_message, MailTransport, MessageIdentity, SmtpsMailer, SmtpsMailerConfig,
};
use calltally_runtime::{
    walk_call_pages, CallLogClient, CallLogClientConfig, RunContext, StopFlag,
};

use crate::args::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn log_startup(cli: &Cli) {
    tracing::info!(
        start_date = cli.start_date.as_str(),
        end_date = cli.end_date.as_str(),
        account_sid = cli.account_sid.as_str(),
        api_base = cli.api_base.as_str(),
        report_path = %cli.report_path.display(),
        email_to = cli.email_to.as_deref().unwrap_or("<skipped>"),
        smtp_host = cli.smtp_host.as_str(),
        "calltally starting"
    );
}

fn mail_settings(cli: &Cli) -> Result<(MessageIdentity, SmtpsMailerConfig)> {
    let (Some(from), Some(to), Some(password)) = (
        cli.email_from.clone(),
        cli.email_to.clone(),
        cli.email_password.clone(),
    ) else {
        bail!("--email-from, --email-to and --email-password are required unless --skip-email is set");
    };

    let identity = MessageIdentity {
        from_address: from.clone(),
        from_display_name: cli.email_from_name.clone(),
        to_address: to.clone(),
    };
    let config = SmtpsMailerConfig {
        host: cli.smtp_host.clone(),
        port: cli.smtp_port,
        username: from.clone(),
        password,
        from_address: from,
        to_address: to,
    };
    Ok((identity, config))
}

async fn run(cli: Cli) -> Result<()> {
    log_startup(&cli);

    let client = CallLogClient::new(CallLogClientConfig {
        api_base: cli.api_base.clone(),
        account_sid: cli.account_sid.clone(),
        api_key: cli.api_key.clone(),
        request_timeout_ms: cli.request_timeout_ms,
    })
    .context("failed to create call-log api client")?;

    let stop = StopFlag::new();
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received; stopping at the next record boundary");
                stop.trigger();
            }
        });
    }

    let mut context = RunContext::new(stop);
    match walk_call_pages(&client, &mut context, &cli.first_page_uri()).await {
        Ok(summary) => tracing::info!(
            pages = summary.pages_fetched,
            counted = summary.calls_counted,
            skipped = summary.calls_skipped,
            stopped_early = summary.stopped_early,
            "call-log walk finished"
        ),
        Err(error) => tracing::error!(
            %error,
            "call-log walk aborted; reporting what was accumulated"
        ),
    }

    let audit_dump = serde_json::to_string_pretty(&context.audit.to_dump())
        .context("failed to serialize audit dump")?;
    write_text_atomic(&cli.audit_dump_path, &audit_dump)
        .with_context(|| format!("failed to write {}", cli.audit_dump_path.display()))?;

    let csv = render_report(&context.histogram);
    write_text_atomic(&cli.report_path, &csv)
        .with_context(|| format!("failed to write {}", cli.report_path.display()))?;
    tracing::info!(
        report = %cli.report_path.display(),
        rows = context.histogram.len(),
        "report written"
    );

    if cli.skip_email {
        tracing::info!("email delivery skipped by request");
        return Ok(());
    }

    let (identity, mailer_config) = mail_settings(&cli)?;
    let attachment_name = cli
        .report_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("report.csv");
    let message = package_report_message(&identity, attachment_name, csv.as_bytes(), Utc::now());

    let mailer = SmtpsMailer::new(mailer_config).context("failed to configure smtp transport")?;
    match mailer.send(message.as_bytes()).await {
        Ok(()) => tracing::info!(to = identity.to_address.as_str(), "report emailed"),
        Err(error) => tracing::error!(
            %error,
            report = %cli.report_path.display(),
            "report email delivery failed; CSV artifact kept on disk"
        ),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse()).await
}
