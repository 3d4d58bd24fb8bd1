//! MIME packaging of the CSV report attachment.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};

/// Fixed multipart boundary; the message carries a single attachment part.
const MULTIPART_BOUNDARY: &str = "MULTIPART-MIXED-BOUNDARY";

/// Subject line for the outbound report message.
pub const REPORT_SUBJECT: &str = "Call Code Report";

/// Identity strings stamped into the outbound message headers. The
/// transport owns the matching envelope; these only shape what the
/// recipient sees.
#[derive(Debug, Clone)]
pub struct MessageIdentity {
    pub from_address: String,
    pub from_display_name: String,
    pub to_address: String,
}

/// Builds the full outbound message: standard headers with a GMT date, a
/// human-readable preamble line, and one base64 `text/plain` attachment
/// part carrying `attachment`. Deterministic for a given `sent_at`.
pub fn package_report_message(
    identity: &MessageIdentity,
    attachment_name: &str,
    attachment: &[u8],
    sent_at: DateTime<Utc>,
) -> String {
    let payload = BASE64.encode(attachment);
    format!(
        "Date: {date}\r\n\
         To: {to}\r\n\
         From: {from} ({from_name})\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"{boundary}\"\r\n\
         \r\n\
         {subject} is attached\r\n\
         --{boundary}\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         Content-Transfer-Encoding: base64\r\n\
         Content-Disposition: attachment; filename=\"{name}\"\r\n\
         \r\n\
         {payload}\r\n\
         --{boundary}--\r\n",
        date = sent_at.to_rfc2822(),
        to = identity.to_address,
        from = identity.from_address,
        from_name = identity.from_display_name,
        subject = REPORT_SUBJECT,
        boundary = MULTIPART_BOUNDARY,
        name = attachment_name,
        payload = payload,
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn test_identity() -> MessageIdentity {
        MessageIdentity {
            from_address: "reports@example.com".to_string(),
            from_display_name: "Report Robot".to_string(),
            to_address: "ops@example.com".to_string(),
        }
    }

    fn test_sent_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 31, 12, 30, 0).unwrap()
    }

    fn payload_section(message: &str) -> &str {
        let marker = "Content-Transfer-Encoding: base64\r\n\
                      Content-Disposition: attachment; filename=\"report.csv\"\r\n\r\n";
        let start = message.find(marker).expect("attachment part") + marker.len();
        let end = message[start..]
            .find("\r\n--")
            .expect("closing boundary after payload");
        &message[start..start + end]
    }

    #[test]
    fn message_carries_standard_headers_and_attachment_part() {
        let message = package_report_message(
            &test_identity(),
            "report.csv",
            b"Keys,Total\n",
            test_sent_at(),
        );

        assert!(message.starts_with("Date: Wed, 31 Mar 2021 12:30:00 +0000\r\n"));
        assert!(message.contains("To: ops@example.com\r\n"));
        assert!(message.contains("From: reports@example.com (Report Robot)\r\n"));
        assert!(message.contains("Subject: Call Code Report\r\n"));
        assert!(message.contains("MIME-Version: 1.0\r\n"));
        assert!(message
            .contains("Content-Type: multipart/mixed; boundary=\"MULTIPART-MIXED-BOUNDARY\"\r\n"));
        assert!(message.contains("\r\nCall Code Report is attached\r\n"));
        assert!(message.contains("Content-Type: text/plain; charset=utf-8\r\n"));
        assert!(message.contains("Content-Disposition: attachment; filename=\"report.csv\"\r\n"));
        assert!(message.ends_with("\r\n--MULTIPART-MIXED-BOUNDARY--\r\n"));
    }

    #[test]
    fn packaging_is_deterministic_for_a_fixed_date() {
        let first =
            package_report_message(&test_identity(), "report.csv", b"a,b,c\n", test_sent_at());
        let second =
            package_report_message(&test_identity(), "report.csv", b"a,b,c\n", test_sent_at());
        assert_eq!(first, second);
    }

    #[test]
    fn attachment_payload_round_trips_with_correct_padding() {
        let cases: [(&[u8], usize); 5] = [
            (b"", 0),
            (b"A", 2),
            (b"AB", 1),
            (b"ABC", 0),
            (b"Keys,Total,1,2,3\n7,1,0,1,0\n", 1),
        ];
        for (bytes, expected_padding) in cases {
            let message =
                package_report_message(&test_identity(), "report.csv", bytes, test_sent_at());
            let payload = payload_section(&message);
            assert_eq!(payload.len() % 4, 0);
            assert_eq!(
                payload.chars().filter(|ch| *ch == '=').count(),
                expected_padding
            );
            let decoded = BASE64.decode(payload).expect("payload should decode");
            assert_eq!(decoded, bytes);
        }
    }

    #[test]
    fn payload_uses_the_standard_alphabet_only() {
        let bytes: Vec<u8> = (0_u16..=255).map(|value| value as u8).collect();
        let message = package_report_message(&test_identity(), "report.csv", &bytes, test_sent_at());
        let payload = payload_section(&message);
        assert!(payload
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '+' || ch == '/' || ch == '='));
        assert_eq!(
            BASE64.decode(payload).expect("payload should decode"),
            bytes
        );
    }
}
