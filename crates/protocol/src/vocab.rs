use serde::{Deserialize, Serialize};

/// The fixed token vocabularies the validator checks against.
///
/// Kept as injectable configuration rather than hardcoded literals inside
/// the validation logic, so the vocabulary can be tested independently and
/// extended without touching the validators. `Default` carries the shipped
/// allow-lists, which must be reproduced exactly for compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenVocabulary {
    pub shells: Vec<String>,
    pub pages: Vec<String>,
    pub section_patterns: Vec<String>,
    pub slots: Vec<String>,
}

impl Default for TokenVocabulary {
    fn default() -> Self {
        Self {
            shells: [
                // Web shells
                "shell.web.app",
                "shell.web.dashboard",
                "shell.web.auth",
                "shell.web.marketing",
                "shell.web.minimal",
                // Mobile shells
                "shell.mobile.app",
                "shell.mobile.fullscreen",
                "shell.mobile.modal",
                "shell.mobile.tab",
                "shell.mobile.drawer",
                "shell.mobile.detail",
            ]
            .map(String::from)
            .to_vec(),
            pages: [
                "page.dashboard",
                "page.detail",
                "page.wizard",
                "page.resource",
                "page.empty",
            ]
            .map(String::from)
            .to_vec(),
            section_patterns: [
                "section.container",
                "section.centered",
                "section.grid-2",
                "section.grid-3",
                "section.grid-4",
                "section.split-50-50",
                "section.split-60-40",
                "section.split-70-30",
                "section.hero",
                "section.feature",
            ]
            .map(String::from)
            .to_vec(),
            slots: ["header", "main", "sidebar", "footer"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_sizes() {
        let vocab = TokenVocabulary::default();
        assert_eq!(vocab.shells.len(), 11);
        assert_eq!(vocab.pages.len(), 5);
        assert_eq!(vocab.section_patterns.len(), 10);
        assert_eq!(vocab.slots.len(), 4);
    }

    #[test]
    fn shipped_tokens_present() {
        let vocab = TokenVocabulary::default();
        assert!(vocab.shells.iter().any(|s| s == "shell.web.dashboard"));
        assert!(vocab.pages.iter().any(|p| p == "page.wizard"));
        assert!(vocab
            .section_patterns
            .iter()
            .any(|p| p == "section.split-60-40"));
    }
}
