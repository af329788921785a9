use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x00_AD_D8;

/// Longest description the bot sends before trimming.
pub const DESCRIPTION_LIMIT: usize = 2000;
/// Length a description is cut to when it exceeds [`DESCRIPTION_LIMIT`].
pub const DESCRIPTION_TRIMMED_LEN: usize = 1950;
/// Appended to every trimmed description.
pub const TRIMMED_NOTICE: &str = "\n\n*note: the message was trimmed to fit the 2k character limit*";

/// Build a standard embed with an optional footer.
pub fn build_embed(
    title: &str,
    description: impl Into<String>,
    footer: Option<&str>,
) -> anyhow::Result<Embed> {
    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = match footer {
        Some(text) if !text.is_empty() => builder
            .footer(EmbedFooterBuilder::new(text).build())
            .validate()?
            .build(),
        _ => builder.validate()?.build(),
    };

    Ok(embed)
}

/// Build the fixed-shape error card.
pub fn error_embed(message: impl Into<String>) -> anyhow::Result<Embed> {
    build_embed("Error", message, None)
}

/// Build a paginated embed; the footer always carries the page indicator.
pub fn build_paginated_embed(
    title: &str,
    description: impl Into<String>,
    page_indicator: &str,
) -> anyhow::Result<Embed> {
    build_embed(title, description, Some(page_indicator))
}

/// Trim a description to the message budget.
///
/// Bodies longer than [`DESCRIPTION_LIMIT`] characters keep their first
/// [`DESCRIPTION_TRIMMED_LEN`] characters followed by [`TRIMMED_NOTICE`].
pub fn truncate_description(body: &str) -> String {
    if body.chars().count() <= DESCRIPTION_LIMIT {
        return body.to_owned();
    }

    let cut = body
        .char_indices()
        .nth(DESCRIPTION_TRIMMED_LEN)
        .map_or(body.len(), |(index, _)| index);

    format!("{}{TRIMMED_NOTICE}", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_untouched() {
        let body = "x".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&body), body);
    }

    #[test]
    fn long_bodies_are_cut_with_notice() {
        let body: String = (0..2100).map(|i| char::from(b'a' + (i % 26) as u8)).collect();

        let trimmed = truncate_description(&body);

        assert!(trimmed.starts_with(&body[..DESCRIPTION_TRIMMED_LEN]));
        assert!(trimmed.ends_with(TRIMMED_NOTICE));
        assert_eq!(
            trimmed.chars().count(),
            DESCRIPTION_TRIMMED_LEN + TRIMMED_NOTICE.chars().count()
        );
    }

    #[test]
    fn cuts_on_character_boundaries() {
        let body = "é".repeat(2100);

        let trimmed = truncate_description(&body);

        assert_eq!(
            trimmed.strip_suffix(TRIMMED_NOTICE).map(|kept| kept.chars().count()),
            Some(DESCRIPTION_TRIMMED_LEN)
        );
    }

    #[test]
    fn error_card_has_fixed_title() {
        let embed = error_embed("Too many arguments.").unwrap();

        assert_eq!(embed.title.as_deref(), Some("Error"));
        assert_eq!(embed.description.as_deref(), Some("Too many arguments."));
        assert!(embed.footer.is_none());
    }

    #[test]
    fn paginated_embed_carries_indicator() {
        let embed = build_paginated_embed("strings functions", "body", "Page 2/3").unwrap();

        assert_eq!(embed.footer.map(|footer| footer.text), Some("Page 2/3".to_owned()));
    }
}
