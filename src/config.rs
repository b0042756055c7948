/// Options shared by every stage of the pipeline.
///
/// A `Config` is plain data: each pipeline call reads it and nothing writes it
/// back, so the same value can be handed to many concurrent calls.
///
/// # Example
/// ```
/// use foxl::config::Config;
///
/// let config = Config::default();
/// assert!(!config.stop_on_lex_error);
///
/// let strict = Config::default().with_stop_on_lex_error(true);
/// assert!(strict.stop_on_lex_error);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// End tokenization at the first unrecognized character instead of
    /// reporting it and skipping ahead.
    pub stop_on_lex_error: bool,
}

impl Config {
    /// Returns a copy with `stop_on_lex_error` set.
    #[must_use]
    pub const fn with_stop_on_lex_error(mut self, stop: bool) -> Self {
        self.stop_on_lex_error = stop;
        self
    }
}
