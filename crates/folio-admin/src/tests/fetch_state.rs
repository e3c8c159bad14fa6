use crate::FetchState;
use crate::tests::{FetchBehavior, PROJECT_ID, RecordingGateway, sample_project};

#[test]
fn test_accessors() {
    let loading: FetchState<u8> = FetchState::Loading;
    assert!(loading.is_loading());
    assert!(loading.error().is_none());
    assert!(loading.data().is_none());

    let failed: FetchState<u8> = FetchState::Error("boom".to_string());
    assert!(!failed.is_loading());
    assert_eq!(failed.error(), Some("boom"));

    let loaded = FetchState::Loaded(Some(7u8));
    assert_eq!(loaded.data(), Some(&7));

    let missing: FetchState<u8> = FetchState::Loaded(None);
    assert!(missing.data().is_none());
    assert!(missing.error().is_none());
}

#[tokio::test]
async fn test_fetch_maps_gateway_results() {
    let found = RecordingGateway::new(FetchBehavior::Found(sample_project()));
    let missing = RecordingGateway::new(FetchBehavior::Missing);
    let failing = RecordingGateway::new(FetchBehavior::Fails);

    assert_eq!(
        FetchState::fetch(&found, PROJECT_ID).await,
        FetchState::Loaded(Some(sample_project()))
    );
    assert_eq!(
        FetchState::fetch(&missing, PROJECT_ID).await,
        FetchState::Loaded(None)
    );
    assert!(
        FetchState::fetch(&failing, PROJECT_ID)
            .await
            .error()
            .is_some()
    );
}
