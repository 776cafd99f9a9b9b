//! Prompt template for the mock-trial judgment.
//!
//! The template asks the model to pick, with equal odds, between a single
//! first-instance verdict and a verdict overturned on appeal. Nothing here
//! enforces that split; it is left entirely to the model.

const JUDGMENT_TEMPLATE: &str = include_str!("judgment_template.txt");
const USER_INPUT_PLACEHOLDER: &str = "{{USER_INPUT}}";

/// Substitutes the user's question into the judgment template verbatim.
pub fn render_prompt(user_input: &str) -> String {
    // Single pass, so placeholder text inside the input is never re-expanded.
    JUDGMENT_TEMPLATE.replacen(USER_INPUT_PLACEHOLDER, user_input, 1)
}
