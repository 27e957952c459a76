//! Maps for the communication capabilities.

use crate::harness::{CapabilityTest, MapContext};
use anyhow::{Result, anyhow, bail};
use serde_json::{Value, json};

// Inbound test number; see https://receive-smss.com/sms/4915207930698/
const TEST_RECIPIENT: &str = "+4915207930698";

/// Drive `communication/send-sms` against one provider.
///
/// Two checks: `SendMessage` must match its snapshot, and a second send feeds
/// its `messageId` into `RetrieveMessageStatus`, which must resolve without
/// error (read-after-write within a single run).
pub fn send_sms_map(ctx: &MapContext<'_>, provider: &str, senders: &[String]) -> Result<()> {
    if senders.len() < 2 {
        bail!("send-sms map for {provider} needs at least two sender identities");
    }
    let test = CapabilityTest::new(ctx, "communication/send-sms", provider)?;

    let sent = test.run(
        "SendMessage",
        json!({
            "to": TEST_RECIPIENT,
            "from": senders[0],
            "text": "Hello World!",
        }),
    )?;
    test.match_snapshot("send-message", sent.unwrap()?)?;

    let chained = test.run(
        "SendMessage",
        json!({
            "to": TEST_RECIPIENT,
            "from": senders[1],
            "text": "Hello World!",
        }),
    )?;
    let message_id = chained
        .unwrap()?
        .get("messageId")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("SendMessage result for {provider} is missing messageId"))?
        .to_string();

    let status = test.run("RetrieveMessageStatus", json!({ "messageId": message_id }))?;
    test.match_snapshot("retrieve-message-status", status.unwrap()?)?;
    Ok(())
}

/// Drive `communication/send-email` against one provider.
pub fn send_email_map(ctx: &MapContext<'_>, provider: &str) -> Result<()> {
    let test = CapabilityTest::new(ctx, "communication/send-email", provider)?;

    let sent = test.run(
        "SendEmail",
        json!({
            "from": "noreply@example.com",
            "to": "jane.doe@example.com",
            "subject": "Hello",
            "text": "Hello World!",
        }),
    )?;
    test.match_snapshot("send-email", sent.unwrap()?)?;

    let templated = test.run(
        "SendTemplatedEmail",
        json!({
            "from": "noreply@example.com",
            "to": "jane.doe@example.com",
            "templateId": "welcome",
            "templateData": { "name": "Jane" },
        }),
    )?;
    test.match_snapshot("send-templated-email", templated.unwrap()?)?;
    Ok(())
}
