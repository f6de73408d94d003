//! Style signal — picks the headshot that goes out with an application.

use crate::dictionary::WordList;
use crate::profile::HeadshotStyle;

/// True when some word, with its first `s` swapped for `z`, is exactly `company_name`.
pub fn style_signal(words: &WordList, company_name: &str) -> bool {
    words
        .words()
        .iter()
        .any(|word| word.replacen('s', "z", 1) == company_name)
}

/// Casual for companies that pass the style signal, formal otherwise.
pub fn select_headshot(words: &WordList, company_name: &str) -> HeadshotStyle {
    if style_signal(words, company_name) {
        HeadshotStyle::Casual
    } else {
        HeadshotStyle::Formal
    }
}
