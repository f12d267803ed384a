use utilbox::*;

fn index() -> RegionIndex {
    RegionIndex::new(vec![
        RegionRecord {
            name: "Maharashtra".to_string(),
            subregions: vec!["Mumbai".to_string(), "Pune".to_string(), "Nagpur".to_string()],
        },
        RegionRecord {
            name: "Rajasthan".to_string(),
            subregions: vec!["Jaipur".to_string(), "Udaipur".to_string()],
        },
        RegionRecord {
            name: "Goa".to_string(),
            subregions: vec!["North Goa".to_string(), "South Goa".to_string()],
        },
    ])
}

#[test]
fn test_search_is_case_insensitive() {
    let matches = index().search("MAHA").unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Maharashtra");
    assert_eq!(matches[0].subregion_count, 3);
    assert_eq!(matches[0].subregions[0], "Mumbai");
}

#[test]
fn test_search_matches_substring_anywhere() {
    let matches = index().search("asthan").unwrap();
    assert_eq!(matches[0].name, "Rajasthan");
}

#[test]
fn test_search_multiple_hits() {
    // "a" appears in all three names
    let matches = index().search("a").unwrap();
    assert_eq!(matches.len(), 3);
}

#[test]
fn test_search_no_hits_is_empty_not_error() {
    assert!(index().search("atlantis").unwrap().is_empty());
}

#[test]
fn test_empty_query_rejected() {
    assert_eq!(index().search("  ").unwrap_err(), BoundaryError::EmptyQuery);
}

#[test]
fn test_match_serializes_with_camel_case_count() {
    let matches = index().search("goa").unwrap();
    let json = serde_json::to_value(&matches[0]).unwrap();

    assert_eq!(json["subregionCount"], 2);
}
