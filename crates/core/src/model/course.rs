use serde::Deserialize;
use url::Url;

const SEARCH_BASE: &str = "https://www.google.com/search";

/// A recommended course as delivered by the backend.
///
/// Read-only presentation data; only `title` and `description` are
/// guaranteed, everything else is optional metadata. The backend spells
/// the guaranteed fields as `course_title`/`text`, newer payloads use
/// `title`/`description`; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    #[serde(alias = "course_title")]
    pub title: String,
    #[serde(alias = "text", default)]
    pub description: String,
    /// Relevance in [0, 1] when the backend ranked by similarity.
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl Course {
    /// Where "Start learning" should take the user: the course's own URL
    /// when it has a valid one, otherwise a search for the course title.
    #[must_use]
    pub fn launch_url(&self) -> Url {
        if let Some(raw) = self.url.as_deref() {
            if let Ok(url) = Url::parse(raw) {
                return url;
            }
        }
        self.search_url()
    }

    fn search_url(&self) -> Url {
        let query = format!("{} course", self.title);
        // SEARCH_BASE is a valid absolute URL, so this cannot fail.
        Url::parse_with_params(SEARCH_BASE, [("q", query.as_str())]).expect("static search base")
    }

    /// Rounded match percentage, when the backend provided a similarity.
    #[must_use]
    pub fn match_percent(&self) -> Option<u32> {
        self.similarity.map(|similarity| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                (similarity.clamp(0.0, 1.0) * 100.0).round() as u32
            }
        })
    }
}
