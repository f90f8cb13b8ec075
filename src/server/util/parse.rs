/// Parses a channel mention token ("<#123456789>") into the raw channel id.
///
/// # Arguments
/// - `token` - A single whitespace-delimited command argument
///
/// # Returns
/// - `Some(String)` - The numeric channel id inside the mention
/// - `None` - The token is not a channel mention
pub fn parse_channel_mention(token: &str) -> Option<String> {
    let id = token.strip_prefix("<#")?.strip_suffix('>')?;

    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Some(id.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_channel_mention() {
        assert_eq!(
            parse_channel_mention("<#123456789>"),
            Some("123456789".to_string())
        );
    }

    #[test]
    fn rejects_non_mentions() {
        assert_eq!(parse_channel_mention("123456789"), None);
        assert_eq!(parse_channel_mention("<#>"), None);
        assert_eq!(parse_channel_mention("<#abc>"), None);
        assert_eq!(parse_channel_mention("<@123>"), None);
    }
}
