//! Common types and data structures

use serde::{Deserialize, Deserializer};

/// One catalog entry as delivered by the record feed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZineRecord {
    #[serde(rename = "Identifier", default, deserialize_with = "required_text")]
    pub identifier: String,
    #[serde(rename = "Title", default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(rename = "Subject", default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(rename = "Subject 2", default, deserialize_with = "lenient_text")]
    pub subject_2: Option<String>,
    #[serde(rename = "Creator", default, deserialize_with = "lenient_text")]
    pub creator: Option<String>,
    #[serde(rename = "Content Description", default, deserialize_with = "lenient_text")]
    pub content_description: Option<String>,
    #[serde(rename = "Date of Publication", default, deserialize_with = "lenient_text")]
    pub date_of_publication: Option<String>,
    #[serde(rename = "Language", default, deserialize_with = "lenient_text")]
    pub language: Option<String>,
    #[serde(rename = "Coverage", default, deserialize_with = "lenient_text")]
    pub coverage: Option<String>,
    #[serde(rename = "Contributor(s)", default, deserialize_with = "lenient_text")]
    pub contributors: Option<String>,
    #[serde(rename = "Publisher(s)", default, deserialize_with = "lenient_text")]
    pub publishers: Option<String>,
    #[serde(rename = "Place of Publication", default, deserialize_with = "lenient_text")]
    pub place_of_publication: Option<String>,
    #[serde(rename = "Physical Description", default, deserialize_with = "lenient_text")]
    pub physical_description: Option<String>,
    #[serde(rename = "Freedoms and Restrictions", default, deserialize_with = "lenient_text")]
    pub freedoms_and_restrictions: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub pdf_link: Option<String>,
}

/// Accept strings, numbers and booleans; anything else (null, objects) is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        },
    )
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Treat empty strings the same as a missing field
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ZineRecord {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Both subject tags, skipping empty ones
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        non_empty(&self.subject)
            .into_iter()
            .chain(non_empty(&self.subject_2))
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subject.as_deref() == Some(subject) || self.subject_2.as_deref() == Some(subject)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Link to the full document; `None` means no document is available
    pub fn pdf_link(&self) -> Option<&str> {
        non_empty(&self.pdf_link).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Labelled descriptive metadata in display order
    pub fn details(&self) -> [(&'static str, Option<&str>); 12] {
        [
            ("Author", non_empty(&self.creator)),
            ("Content", non_empty(&self.content_description)),
            ("Identifier", Some(self.identifier.as_str()).filter(|s| !s.is_empty())),
            ("Year", non_empty(&self.date_of_publication)),
            ("Subject", non_empty(&self.subject)),
            ("Language", non_empty(&self.language)),
            ("Coverage", non_empty(&self.coverage)),
            ("Contributors", non_empty(&self.contributors)),
            ("Publisher", non_empty(&self.publishers)),
            ("Place of Publication", non_empty(&self.place_of_publication)),
            ("Physical Description", non_empty(&self.physical_description)),
            ("Freedoms and Restrictions", non_empty(&self.freedoms_and_restrictions)),
        ]
    }
}

/// Title ordering for the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Source order (newest first)
    #[default]
    Default,
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Default, SortOrder::Asc, SortOrder::Desc];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Newest",
            SortOrder::Asc => "A - Z",
            SortOrder::Desc => "Z - A",
        }
    }
}

/// Most recent overlay transition, used only to pick an animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

/// Keys the detail overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    About,
    Library,
    Donate,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::About, View::Library, View::Donate];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "HOME",
            View::About => "ABOUT MORUS",
            View::Library => "ZINE LIBRARY",
            View::Donate => "DONATE",
        }
    }
}

/// Outcome of the record feed request, shared with the loader task
#[derive(Debug, Clone, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ZineRecord>),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_field_names() {
        let json = r#"[{
            "Identifier": "MZ-001",
            "Title": "Squat the Block",
            "Subject": "Housing",
            "Subject 2": "Activism",
            "Contributor(s)": "Various",
            "Date of Publication": 1994,
            "image": "https://example.org/cover.png",
            "pdf_link": null,
            "Unrelated": {"nested": true}
        }]"#;
        let records: Vec<ZineRecord> = serde_json::from_str(json).unwrap();
        let r = &records[0];
        assert_eq!(r.identifier, "MZ-001");
        assert_eq!(r.title(), Some("Squat the Block"));
        assert_eq!(r.subjects().collect::<Vec<_>>(), vec!["Housing", "Activism"]);
        assert_eq!(r.contributors.as_deref(), Some("Various"));
        assert_eq!(r.date_of_publication.as_deref(), Some("1994"));
        assert_eq!(r.pdf_link(), None);
        assert_eq!(r.creator, None);
    }

    #[test]
    fn site_opens_on_home_and_lists_pages_in_nav_order() {
        assert_eq!(View::default(), View::Home);
        let labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["HOME", "ABOUT MORUS", "ZINE LIBRARY", "DONATE"]);
    }

    #[test]
    fn empty_fields_count_as_missing() {
        let record = ZineRecord {
            identifier: "x".into(),
            title: Some(String::new()),
            subject: Some(String::new()),
            subject_2: Some("Art".into()),
            pdf_link: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(record.title(), None);
        assert_eq!(record.subjects().collect::<Vec<_>>(), vec!["Art"]);
        assert_eq!(record.pdf_link(), None);
        let details = record.details();
        assert_eq!(details[0], ("Author", None));
        assert_eq!(details[2], ("Identifier", Some("x")));
    }
}
