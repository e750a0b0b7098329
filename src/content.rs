pub const PROMPT_MESSAGE: &str = "Please provide a search option and click in the search button";
pub const NO_RESULTS_MESSAGE: &str = "Your search has no results";

/// What sits below the search form.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<T> {
    /// Nothing searched yet.
    Prompt(&'static str),
    /// Searched, zero results.
    Empty(&'static str),
    Results(T),
}

impl<T> Content<T> {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Content::Prompt(message) | Content::Empty(message) => Some(*message),
            Content::Results(_) => None,
        }
    }

    pub fn results(&self) -> Option<&T> {
        match self {
            Content::Results(results) => Some(results),
            _ => None,
        }
    }
}

/// Picks the prompt, the empty state, or the results view.
/// `results` is only built when it will be shown.
pub fn content<T>(has_searched: bool, result_count: usize, results: impl FnOnce() -> T) -> Content<T> {
    if !has_searched {
        Content::Prompt(PROMPT_MESSAGE)
    } else if result_count == 0 {
        Content::Empty(NO_RESULTS_MESSAGE)
    } else {
        Content::Results(results())
    }
}
