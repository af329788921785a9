/// Pure card builders for lookup results.
pub mod embeds;
pub mod lookup;
/// Reaction navigation for paginated listings.
pub mod navigate;
pub mod pages;
