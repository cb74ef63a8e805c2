use super::*;

#[test]
fn timeout_and_transport_are_distinct_kinds() {
    let timeout = FetchError::Timeout(Duration::from_secs(15));
    let transport = FetchError::Transport("connection refused".to_owned());
    assert_ne!(timeout, transport);
}

#[test]
fn display_names_the_failure() {
    assert_eq!(
        FetchError::Status(500).to_string(),
        "unexpected status 500"
    );
    assert_eq!(
        FetchError::Api("city not found".to_owned()).to_string(),
        "city not found"
    );
    assert!(
        FetchError::Transport("refused".to_owned())
            .to_string()
            .starts_with("transport failure")
    );
}
