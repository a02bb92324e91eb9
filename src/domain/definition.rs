//! Dictionary entry model returned by the definition lookup.
//!
//! An entry groups its senses (one group per part of speech), and each sense
//! group lists definition strings in the dictionary's own order. Field aliases
//! accept the public dictionary API's `meanings` / `partOfSpeech` spelling.

use serde::{Deserialize, Serialize};

/// Text shown when an entry exists but carries no usable definition.
pub const NO_DEFINITION_FOUND: &str = "No definition found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default, alias = "meanings")]
    pub senses: Vec<SenseGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseGroup {
    #[serde(default, alias = "partOfSpeech")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl DefinitionEntry {
    /// Returns the first definition of the first sense group.
    ///
    /// Only the first group is consulted: an entry whose first group is empty
    /// has no renderable definition even if later groups do. Blank strings
    /// count as missing.
    #[must_use]
    pub fn first_definition(&self) -> Option<&str> {
        self.senses
            .first()?
            .definitions
            .first()
            .map(|d| d.definition.trim())
            .filter(|text| !text.is_empty())
    }

    /// Returns the text to display for this entry, falling back to
    /// [`NO_DEFINITION_FOUND`].
    #[must_use]
    pub fn display_text(&self) -> String {
        self.first_definition()
            .unwrap_or(NO_DEFINITION_FOUND)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(definitions: &[&str]) -> SenseGroup {
        SenseGroup {
            part_of_speech: Some("adjective".to_string()),
            definitions: definitions
                .iter()
                .map(|d| Definition {
                    definition: (*d).to_string(),
                    example: None,
                })
                .collect(),
        }
    }

    #[test]
    fn takes_first_group_first_definition() {
        let entry = DefinitionEntry {
            word: "happy".to_string(),
            senses: vec![group(&["Feeling pleasure.", "Lucky."]), group(&["Other."])],
        };
        assert_eq!(entry.first_definition(), Some("Feeling pleasure."));
    }

    #[test]
    fn empty_first_group_falls_back() {
        let entry = DefinitionEntry {
            word: "happy".to_string(),
            senses: vec![group(&[]), group(&["Later group."])],
        };
        assert_eq!(entry.first_definition(), None);
        assert_eq!(entry.display_text(), NO_DEFINITION_FOUND);
    }

    #[test]
    fn decodes_public_dictionary_shape() {
        let json = r#"[{
            "word": "happy",
            "phonetic": "/ˈhæpi/",
            "meanings": [{
                "partOfSpeech": "adjective",
                "definitions": [{"definition": "Having a feeling arising from a consciousness of well-being.", "synonyms": []}]
            }]
        }]"#;
        let entries: Vec<DefinitionEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].senses[0].part_of_speech.as_deref(), Some("adjective"));
        assert_eq!(
            entries[0].display_text(),
            "Having a feeling arising from a consciousness of well-being."
        );
    }
}
