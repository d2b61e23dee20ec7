use yelp_client::model::responses::SearchResults;

#[test]
fn test_search_results_deserialization() {
    let json = r#"{
        "businesses": [
            {"id": "one", "name": "First", "distance": 120.5, "display_phone": "(415) 555-0100"},
            {"id": "two", "name": "Second", "distance": 830.25}
        ],
        "total": 240,
        "region": {"center": {"latitude": 37.767413217936834, "longitude": -122.42820739746094}}
    }"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();

    assert_eq!(results.total, 240);
    assert_eq!(results.businesses.len(), 2);
    assert_eq!(results.businesses[0].id, "one");
    assert_eq!(results.businesses[0].distance, Some(120.5));
    assert_eq!(results.businesses[0].display_phone, "(415) 555-0100");
    assert_eq!(results.businesses[1].id, "two");
    let region = results.region.as_ref().expect("region should be present");
    assert_eq!(region.center.latitude, 37.767413217936834);
    assert!(!results.is_empty());
}

#[test]
fn test_empty_search_results() {
    let results: SearchResults = serde_json::from_str(r#"{"businesses": [], "total": 0}"#).unwrap();

    assert!(results.is_empty());
    assert_eq!(results.total, 0);
    assert!(results.region.is_none());
}

#[test]
fn test_search_results_with_null_fields() {
    let json = r#"{"businesses":[{"id":"a","name":"X","coordinates":{"latitude":null,"longitude":null},"phone":null}],"total":1}"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();

    assert_eq!(results.total, 1);
    assert_eq!(results.businesses.len(), 1);
    assert_eq!(results.businesses[0].id, "a");
    assert_eq!(results.businesses[0].coordinates.latitude, 0.0);
    assert_eq!(results.businesses[0].phone, "");
}

#[test]
fn test_null_envelope_fields_decode_to_defaults() {
    let json = r#"{"businesses": null, "total": null, "region": {"center": null}}"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();

    assert!(results.is_empty());
    assert_eq!(results.total, 0);
    let region = results.region.as_ref().expect("region should be present");
    assert_eq!(region.center.longitude, 0.0);
}
