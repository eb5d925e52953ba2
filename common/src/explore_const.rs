//! Fixed endpoint paths, element identifiers and filter defaults.

/// Search endpoint, receives a JSON `SearchRequest` body.
pub const EXPLORE_PATH: &str = "/explore";

/// Number of stars in a rating row.
pub const STAR_COUNT: u8 = 5;

/// Floor written to a max field when its paired min field stops holding a number.
pub const NUMERIC_FLOOR_RESET: i64 = 0;

pub const DEFAULT_PUBLICATION_TYPE: &str = "any";

pub fn average_rating_path(dataset_id: i64) -> String {
    format!("/datasets/{dataset_id}/average-rating")
}

pub fn download_path(dataset_id: i64) -> String {
    format!("/dataset/download/{dataset_id}")
}

/// Element ids the explore page exposes besides the filter controls.
pub mod element_id {
    pub const CSRF_TOKEN: &str = "csrf_token";
    pub const RESULTS: &str = "results";
    pub const RESULTS_NUMBER: &str = "results_number";
    pub const RESULTS_NOT_FOUND: &str = "results_not_found";
    pub const CLEAR_FILTERS: &str = "clear-filters";
    pub const FILTERS: &str = "filters";
}

/// `(value, label)` pairs of the publication type select, `any` first.
pub const PUBLICATION_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("any", "Any"),
    ("none", "None"),
    ("annotationcollection", "Annotation Collection"),
    ("book", "Book"),
    ("section", "Book Section"),
    ("conferencepaper", "Conference Paper"),
    ("datamanagementplan", "Data Management Plan"),
    ("article", "Journal Article"),
    ("patent", "Patent"),
    ("preprint", "Preprint"),
    ("deliverable", "Project Deliverable"),
    ("milestone", "Project Milestone"),
    ("proposal", "Proposal"),
    ("report", "Report"),
    ("softwaredocumentation", "Software Documentation"),
    ("taxonomictreatment", "Taxonomic Treatment"),
    ("technicalnote", "Technical Note"),
    ("thesis", "Thesis"),
    ("workingpaper", "Working Paper"),
    ("other", "Other"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_paths() {
        assert_eq!(average_rating_path(42), "/datasets/42/average-rating");
        assert_eq!(download_path(7), "/dataset/download/7");
    }

    #[test]
    fn test_default_publication_type_is_first_option() {
        assert_eq!(PUBLICATION_TYPE_OPTIONS[0].0, DEFAULT_PUBLICATION_TYPE);
    }
}
