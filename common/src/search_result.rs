use serde::{Deserialize, Serialize};


/// One dataset matching a search, as returned by the explore endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub publication_type: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub authors: Vec<DatasetAuthor>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "total_size_in_human_format", default)]
    pub total_size_human: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetAuthor {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
}

/// Response of the average rating endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageRating {
    pub average_rating: f64,
}

/// Parses the explore response body: a bare JSON array, empty when nothing matched.
pub fn parse_search_response(body: &str) -> serde_json::Result<Vec<SearchResult>> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"[
        {
            "id": 3,
            "title": "Sample dataset 3",
            "url": "http://localhost/doi/10.1234/dataset3/",
            "publication_type": "Book",
            "description": "Description for dataset 3",
            "created_at": "Wed, 01 Jan 2020 00:00:00 GMT",
            "authors": [
                {"name": "John Doe", "affiliation": "University of Testing", "orcid": "1234-5678"},
                {"name": "Jane Roe", "affiliation": null}
            ],
            "tags": ["tag1", "tag2"],
            "total_size_in_human_format": "4.88 KB",
            "files_count": 5
        }
    ]"#;

    #[test]
    fn test_parse_response() {
        let results = parse_search_response(RESPONSE).unwrap();
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.id, 3);
        assert_eq!(result.total_size_human, "4.88 KB");
        assert_eq!(result.authors[0].orcid.as_deref(), Some("1234-5678"));
        assert_eq!(result.authors[1].affiliation, None);
        assert_eq!(result.authors[1].orcid, None);
        assert_eq!(result.tags, vec!["tag1", "tag2"]);
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(parse_search_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_wrapped_object_is_rejected() {
        assert!(parse_search_response(r#"{"results": []}"#).is_err());
    }

    #[test]
    fn test_parse_average_rating() {
        let rating: AverageRating = serde_json::from_str(r#"{"average_rating": 3.75}"#).unwrap();
        assert_eq!(rating.average_rating, 3.75);
    }
}
