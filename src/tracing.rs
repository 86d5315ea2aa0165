//! Logging setup and query snapshots for state-change diagnostics
//!
//! `update` logs every message under the `message` target and every state
//! change as a [`QuerySnapshot`] diff under the `query` target, so
//! `RUST_LOG=query=debug` shows just the chip transitions.
//!
//! The rolling log file is `logs/querybar.log` in the config directory
//! (see [`crate::config_paths`]); `QUERYBAR_FILE_LOG` overrides its filter.

use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{QueryModel, Token, TokenId};

const LOG_FILE: &str = "querybar.log";
/// File log filter when `QUERYBAR_FILE_LOG` is unset: our crate plus the diff targets
const FILE_FILTER: &str = "querybar=debug,query=debug,message=debug";

/// Install stderr and rolling-file logging
///
/// stderr follows `RUST_LOG` and stays quiet (`warn`) otherwise, so the
/// driver's own output is readable. A missing log directory only disables
/// the file half.
pub fn init() {
    let (file, file_error) = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => (Some(file_layer(&dir)), None),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(console_layer())
        .with(file)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled: {}", e);
    }
}

fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter)
}

fn file_layer<S>(dir: &Path) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let filter = EnvFilter::try_from_env("QUERYBAR_FILE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(FILE_FILTER));
    fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE))
        .with_ansi(false)
        .with_line_number(true)
        .with_filter(filter)
}

/// Immutable snapshot of the query for rendering and diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySnapshot {
    pub tokens: Vec<Token>,
    pub active: Option<TokenId>,
    pub buffer: String,
    pub pending_operator: bool,
}

impl QuerySnapshot {
    pub fn from_model(model: &QueryModel) -> Self {
        Self {
            tokens: model.tokens().to_vec(),
            active: model.active_id(),
            buffer: model.buffer().to_string(),
            pending_operator: model.pending_operator(),
        }
    }

    /// Chips rendered as `[type:value]`, the active one marked with `*`
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(|t| {
                let marker = if Some(t.id) == self.active { "*" } else { "" };
                format!("[{}{}:{}]", marker, t.kind, t.value)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &QuerySnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.tokens != other.tokens {
            changes.push(format!("tokens: {} → {}", self.render(), other.render()));
        }
        if self.active != other.active {
            changes.push(format!("active: {:?} → {:?}", self.active, other.active));
        }
        if self.buffer != other.buffer {
            changes.push(format!("buffer: {:?} → {:?}", self.buffer, other.buffer));
        }
        if self.pending_operator != other.pending_operator {
            let status = if other.pending_operator {
                "raised"
            } else {
                "cleared"
            };
            changes.push(format!("pending operator {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
