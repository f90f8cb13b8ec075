//! Command executor: parses a command line and produces a response string.
//!
//! Pure dispatch over the storage contract; invoked from both the gateway
//! auto-reply path and the manual API endpoint. Responses are plain chat
//! text. An unrecognized verb is a normal response pointing at `!help`, not
//! an error.

use chrono::Utc;

use crate::server::{
    data::{Storage, RETENTION_DAYS},
    error::AppError,
    model::MessageQuery,
    util::{
        format::{format_uptime, truncate_content},
        parse::parse_channel_mention,
    },
};

/// Leading character identifying a chat message as a bot command.
pub const COMMAND_PREFIX: char = '!';

/// Default number of messages `!messages` returns.
const DEFAULT_MESSAGE_COUNT: u64 = 5;

/// Hard cap on the `!messages` count argument.
const MAX_MESSAGE_COUNT: u64 = 20;

/// Preview truncation length for message content in chat responses.
const PREVIEW_CHARS: usize = 100;

pub struct CommandService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> CommandService<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Executes one command line and returns the response text.
    pub async fn execute(&self, input: &str) -> Result<String, AppError> {
        let mut parts = input.trim().split_whitespace();
        let verb = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match verb {
            "!help" => Ok(help_text()),
            "!messages" => self.recent_messages(&args).await,
            "!stats" => self.stats().await,
            "!clear" => self.clear(args.first().copied()).await,
            _ => Ok(format!(
                "Unknown command: {verb}. Use {COMMAND_PREFIX}help to see available commands."
            )),
        }
    }

    /// `!messages [#channel] [count]` - recent archived messages, newest
    /// first. The count argument is clamped to `MAX_MESSAGE_COUNT`.
    async fn recent_messages(&self, args: &[&str]) -> Result<String, AppError> {
        let channel_id = args.iter().find_map(|arg| parse_channel_mention(arg));
        let count = args
            .iter()
            .find_map(|arg| arg.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MESSAGE_COUNT)
            .min(MAX_MESSAGE_COUNT);

        let page = self
            .storage
            .get_messages(MessageQuery {
                channel_id,
                limit: count,
                ..Default::default()
            })
            .await?;

        if page.messages.is_empty() {
            return Ok("No messages found.".to_string());
        }

        let lines: Vec<String> = page
            .messages
            .iter()
            .map(|message| {
                format!(
                    "{} ({}): {}",
                    message.author_username,
                    message.created_at.format("%Y-%m-%d %H:%M"),
                    truncate_content(&message.content, PREVIEW_CHARS)
                )
            })
            .collect();

        Ok(format!(
            "Showing {} of {} archived messages:\n{}",
            lines.len(),
            page.total,
            lines.join("\n")
        ))
    }

    /// `!stats` - counts and uptime in fixed-format text.
    async fn stats(&self) -> Result<String, AppError> {
        let status = self.storage.get_bot_status().await?;

        let uptime = match status.uptime_started.filter(|_| status.is_online) {
            Some(started) => format_uptime(Utc::now() - started),
            None => "0m".to_string(),
        };

        Ok(format!(
            "Servers: {}\nChannels: {}\nMessages: {}\nUptime: {}",
            status.servers_count, status.channels_count, status.messages_count, uptime
        ))
    }

    /// `!clear [days]` - purges expired messages.
    ///
    /// The days argument is echoed in the response, but deletion always uses
    /// the fixed retention window regardless of the value supplied.
    async fn clear(&self, days_arg: Option<&str>) -> Result<String, AppError> {
        let days = days_arg
            .and_then(|arg| arg.parse::<i64>().ok())
            .unwrap_or(RETENTION_DAYS);

        let deleted = self.storage.delete_old_messages().await?;

        Ok(format!("Cleared {deleted} messages older than {days} days."))
    }
}

fn help_text() -> String {
    [
        "Available commands:",
        "!help - Show this message",
        "!messages [#channel] [count] - Show recent archived messages (max 20)",
        "!stats - Show archive statistics",
        "!clear [days] - Purge messages past the retention window",
    ]
    .join("\n")
}
