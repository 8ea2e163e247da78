use serde::Deserialize;

/// One scored keyword for a speech.
///
/// The service serializes entries either as a `[word, score]` pair or as a
/// bare string, depending on which analysis batch produced them. Both forms
/// must deserialize; neither is canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordEntry {
    pub word: String,
    pub score: Option<f64>,
}

impl<'de> Deserialize<'de> for KeywordEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Pair(String, f64),
            Bare(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Pair(word, score) => KeywordEntry {
                word,
                score: Some(score),
            },
            Wire::Bare(word) => KeywordEntry { word, score: None },
        })
    }
}

/// Envelope of `GET /keywords/speech/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechKeywordsResponse {
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
}
