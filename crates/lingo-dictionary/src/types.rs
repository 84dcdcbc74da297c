use serde::Deserialize;

/// One dictionary entry, shaped after the free dictionary API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Sense>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sense {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<DefinitionText>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionText {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl LexicalEntry {
    /// Parse the JSON array the dictionary returns for one word
    pub fn parse_all(body: &str) -> Result<Vec<LexicalEntry>, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Headline phonetic, falling back to the first transcription with text
    pub fn pronunciation(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .map(str::trim)
                    .find(|t| !t.is_empty())
            })
    }

    /// First sense that carries a non-empty definition text
    pub fn first_definition(&self) -> Option<(&Sense, &DefinitionText)> {
        self.meanings.iter().find_map(|sense| {
            sense
                .definitions
                .iter()
                .find(|d| !d.definition.trim().is_empty())
                .map(|d| (sense, d))
        })
    }
}
