//! Refinement intents

use serde::{Deserialize, Serialize};

/// The classified category of a refinement instruction.
///
/// Closed set: every instruction maps to exactly one intent, with
/// [`Intent::GenericRevisionRequest`] as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ShortenRequest,
    LengthenRequest,
    AddScriptureRequest,
    SimplifyLanguageRequest,
    #[default]
    GenericRevisionRequest,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::ShortenRequest,
        Intent::LengthenRequest,
        Intent::AddScriptureRequest,
        Intent::SimplifyLanguageRequest,
        Intent::GenericRevisionRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ShortenRequest => "shorten",
            Intent::LengthenRequest => "lengthen",
            Intent::AddScriptureRequest => "add_scripture",
            Intent::SimplifyLanguageRequest => "simplify_language",
            Intent::GenericRevisionRequest => "generic_revision",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::ShortenRequest => "Shorten",
            Intent::LengthenRequest => "Lengthen",
            Intent::AddScriptureRequest => "Add Scripture",
            Intent::SimplifyLanguageRequest => "Simplify Language",
            Intent::GenericRevisionRequest => "General Revision",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_generic() {
        assert_eq!(Intent::default(), Intent::GenericRevisionRequest);
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Intent::AddScriptureRequest).unwrap();
        assert_eq!(json, "\"add_scripture_request\"");
    }
}
