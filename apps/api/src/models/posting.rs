use serde::Serialize;

/// A job posting as returned by the search provider, normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub title: String,
    pub company: String,
    /// Raw location string, e.g. "New York, NY, United States".
    pub loc: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
    /// Whole days since posting, or "N/A".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_ago: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Visa sponsorship estimate attached to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sponsorship {
    Yes,
    No,
}

impl From<bool> for Sponsorship {
    fn from(likely: bool) -> Self {
        if likely {
            Sponsorship::Yes
        } else {
            Sponsorship::No
        }
    }
}

/// A posting annotated with its sponsorship label. Serializes flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub sponsorship: Sponsorship,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Posting {
        Posting {
            title: "Data Science Intern".to_string(),
            company: "Citadel".to_string(),
            loc: "New York, NY, United States".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
            description: None,
            date_posted: Some("3 days ago".to_string()),
            days_ago: Some("3".to_string()),
            link: None,
        }
    }

    #[test]
    fn test_labeled_posting_serializes_flat_camel_case() {
        let labeled = LabeledPosting {
            posting: sample(),
            sponsorship: Sponsorship::Yes,
        };
        let json = serde_json::to_value(&labeled).unwrap();

        assert_eq!(json["title"], "Data Science Intern");
        assert_eq!(json["loc"], "New York, NY, United States");
        assert_eq!(json["datePosted"], "3 days ago");
        assert_eq!(json["daysAgo"], "3");
        assert_eq!(json["sponsorship"], "Yes");
        assert!(json.get("posting").is_none());
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("link").is_none());
    }

    #[test]
    fn test_sponsorship_serializes_as_yes_or_no() {
        assert_eq!(serde_json::to_string(&Sponsorship::from(true)).unwrap(), r#""Yes""#);
        assert_eq!(serde_json::to_string(&Sponsorship::from(false)).unwrap(), r#""No""#);
    }
}
