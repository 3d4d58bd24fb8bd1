//! Delivery packaging for the calltally report: base64 attachment
//! encoding, MIME message assembly, and the SMTPS submission seam.

mod message;
mod transport;

pub use message::{package_report_message, MessageIdentity, REPORT_SUBJECT};
pub use transport::{MailError, MailTransport, SmtpsMailer, SmtpsMailerConfig};
