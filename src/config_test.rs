use super::*;

#[test]
fn default_endpoint_is_the_hosted_cloud() {
    assert_eq!(DEFAULT_ENDPOINT, "https://cloud.appwrite.io/v1");
}

#[test]
fn both_sources_share_one_datastore() {
    let config = Config::from_build_env();
    assert_eq!(
        config.collection_a.datastore_id,
        config.collection_b.datastore_id
    );
}

#[test]
fn labels_and_endpoint_are_never_empty() {
    let config = Config::from_build_env();
    assert!(!config.endpoint.is_empty());
    assert!(!config.collection_a.label.is_empty());
    assert!(!config.collection_b.label.is_empty());
}
