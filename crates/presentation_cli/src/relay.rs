//! Relay mode
//!
//! Reads one JSON object of message fields per input line and writes one
//! JSON relay message per reply. Bad lines and failed queries are logged and
//! skipped so a single request never stops the loop.

use application::QueryService;
use domain::{MessageFields, Query};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// Fields applied when an input line does not carry them
#[derive(Debug, Clone, Default)]
pub struct RelayDefaults {
    pub sender: Option<String>,
    pub src: Option<String>,
}

/// Counters reported when the input ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    pub replied: usize,
    pub silent: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// Parse one input line into message fields
///
/// String values are taken as is; numbers and booleans are stringified;
/// nulls are dropped.
pub fn parse_fields(line: &str) -> anyhow::Result<MessageFields> {
    let Value::Object(map) = serde_json::from_str::<Value>(line)? else {
        anyhow::bail!("expected a JSON object");
    };

    let mut fields = MessageFields::new();
    for (name, value) in map {
        match value {
            Value::String(s) => {
                fields.insert(name, s);
            },
            Value::Number(n) => {
                fields.insert(name, n.to_string());
            },
            Value::Bool(b) => {
                fields.insert(name, b.to_string());
            },
            Value::Null => {},
            other => anyhow::bail!("field {name:?} must be a scalar, got {other}"),
        }
    }
    Ok(fields)
}

fn apply_defaults(fields: &mut MessageFields, defaults: &RelayDefaults) {
    for (name, value) in [("sender", &defaults.sender), ("src", &defaults.src)] {
        if let Some(value) = value {
            fields
                .entry(name.to_string())
                .or_insert_with(|| value.clone());
        }
    }
}

/// Answer every query read from `input`, writing replies to `output`
pub async fn run<R, W>(
    service: &QueryService,
    input: R,
    mut output: W,
    defaults: &RelayDefaults,
) -> anyhow::Result<RelayStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = RelayStats::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let query = match parse_fields(line).and_then(|mut fields| {
            apply_defaults(&mut fields, defaults);
            Ok(Query::from_fields(&fields)?)
        }) {
            Ok(query) => query,
            Err(e) => {
                warn!(error = %e, "Rejected relay input");
                stats.rejected += 1;
                continue;
            },
        };

        match service.handle(query).await {
            Ok(Some(reply)) => {
                let mut encoded = serde_json::to_string(&reply)?;
                encoded.push('\n');
                output.write_all(encoded.as_bytes()).await?;
                output.flush().await?;
                stats.replied += 1;
            },
            Ok(None) => {
                debug!("No sender, reply suppressed");
                stats.silent += 1;
            },
            Err(e) => {
                error!(error = %e, "Query failed");
                stats.failed += 1;
            },
        }
    }

    info!(
        replied = stats.replied,
        silent = stats.silent,
        rejected = stats.rejected,
        failed = stats.failed,
        "Relay input closed"
    );
    Ok(stats)
}
