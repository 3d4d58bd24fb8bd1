//! Command-line surface for the calltally binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "calltally",
    about = "Aggregates call-log event codes into a per-day histogram report and emails it",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "CALLTALLY_START_DATE",
        help = "Inclusive start date (YYYY-MM-DD) of the reporting window"
    )]
    pub start_date: String,

    #[arg(
        long,
        env = "CALLTALLY_END_DATE",
        help = "Inclusive end date (YYYY-MM-DD) of the reporting window"
    )]
    pub end_date: String,

    #[arg(
        long,
        env = "CALLTALLY_ACCOUNT_SID",
        help = "Call-log API account identifier"
    )]
    pub account_sid: String,

    #[arg(
        long,
        env = "CALLTALLY_API_KEY",
        hide_env_values = true,
        help = "Call-log API key paired with the account identifier"
    )]
    pub api_key: String,

    #[arg(
        long,
        env = "CALLTALLY_API_BASE",
        default_value = "https://api.twilio.com",
        help = "Base URL of the call-log API"
    )]
    pub api_base: String,

    #[arg(
        long,
        env = "CALLTALLY_REQUEST_TIMEOUT_MS",
        default_value_t = 4_000,
        help = "Per-request timeout in milliseconds; a timeout counts as a fetch failure"
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long,
        env = "CALLTALLY_REPORT_PATH",
        default_value = "report.csv",
        help = "Destination path of the rendered CSV report"
    )]
    pub report_path: PathBuf,

    #[arg(
        long,
        env = "CALLTALLY_AUDIT_DUMP_PATH",
        default_value = "dump.json",
        help = "Destination path of the raw event-log audit dump"
    )]
    pub audit_dump_path: PathBuf,

    #[arg(
        long,
        env = "CALLTALLY_EMAIL_FROM",
        required_unless_present = "skip_email",
        help = "Sender mailbox; doubles as the SMTP username"
    )]
    pub email_from: Option<String>,

    #[arg(
        long,
        env = "CALLTALLY_EMAIL_FROM_NAME",
        default_value = "calltally",
        help = "Display name stamped next to the sender address"
    )]
    pub email_from_name: String,

    #[arg(
        long,
        env = "CALLTALLY_EMAIL_TO",
        required_unless_present = "skip_email",
        help = "Recipient mailbox for the report"
    )]
    pub email_to: Option<String>,

    #[arg(
        long,
        env = "CALLTALLY_EMAIL_PASSWORD",
        hide_env_values = true,
        required_unless_present = "skip_email",
        help = "SMTP credential for the sender mailbox"
    )]
    pub email_password: Option<String>,

    #[arg(
        long,
        env = "CALLTALLY_SMTP_HOST",
        default_value = "smtp.gmail.com",
        help = "SMTPS submission host"
    )]
    pub smtp_host: String,

    #[arg(
        long,
        env = "CALLTALLY_SMTP_PORT",
        default_value_t = 465,
        help = "SMTPS submission port"
    )]
    pub smtp_port: u16,

    #[arg(
        long,
        env = "CALLTALLY_SKIP_EMAIL",
        help = "Render and keep the artifacts without emailing the report"
    )]
    pub skip_email: bool,
}

impl Cli {
    /// Relative URI of the first call-log page for the configured
    /// account and reporting window.
    pub fn first_page_uri(&self) -> String {
        format!(
            "/2010-04-01/Accounts/{}/Calls.json?StartTime>={}T00:00:00-00:00&EndTime<={}T23:59:59-00:00",
            self.account_sid, self.start_date, self.end_date
        )
    }
}
