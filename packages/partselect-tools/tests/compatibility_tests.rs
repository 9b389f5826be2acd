//! Compatibility and related-parts flows end to end over a mock transport.

use partselect_tools::testing::{fixtures, MockTransport};
use partselect_tools::{Compatibility, Error, PartSelect, RelatedParts};

const BASE: &str = "https://www.partselect.com";

fn search_url(id: &str) -> String {
    format!("{BASE}/api/search/?searchterm={id}")
}

fn compat_url(model: &str, inventory: &str) -> String {
    format!(
        "{BASE}/api/Part/PartCompatibilityCheck?modelnumber={model}&inventoryid={inventory}&partdescription=undefined"
    )
}

/// Valid part PS12345 and valid refrigerator model W987654.
fn valid_pair_transport() -> MockTransport {
    MockTransport::new()
        .with_page(search_url("PS12345"), fixtures::part_page())
        .with_page(
            search_url("W987654"),
            fixtures::model_page("Refrigerator Model X", "Sections of the unit"),
        )
}

#[tokio::test]
async fn test_compatible_pair() {
    let transport = valid_pair_transport().with_page(
        compat_url("W987654", "12345"),
        r#"{"compatibilityStatus":"MODEL_PARTSKU_MATCH"}"#,
    );
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("PS12345_+_W987654").await.unwrap();

    assert_eq!(result, Compatibility::Compatible);
    assert_eq!(result.to_string(), "The provided part and model are compatible.");
    assert_eq!(
        client.transport().calls(),
        vec![
            search_url("PS12345"),
            search_url("W987654"),
            compat_url("W987654", "12345"),
        ]
    );
}

#[tokio::test]
async fn test_not_compatible_pair() {
    let transport = valid_pair_transport().with_page(
        compat_url("W987654", "12345"),
        r#"{"compatibilityStatus":"MODEL_NOMATCH"}"#,
    );
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("PS12345_+_W987654").await.unwrap();

    assert_eq!(result, Compatibility::NotCompatible);
    assert_eq!(result.to_string(), "The provided part and model are not compatible.");
}

#[tokio::test]
async fn test_invalid_part_short_circuits_before_model() {
    let transport = MockTransport::new()
        .with_page(search_url("BADPART"), fixtures::untyped_page())
        .with_page(
            search_url("W987654"),
            fixtures::model_page("Refrigerator Model X", "Sections of the unit"),
        );
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("BADPART_+_W987654").await.unwrap();

    assert_eq!(result, Compatibility::InvalidPart);
    assert_eq!(result.to_string(), "The provided part number is invalid.");
    assert_eq!(client.transport().call_count(), 1);
    assert_eq!(client.transport().calls_matching("W987654"), 0);
    assert_eq!(client.transport().calls_matching("PartCompatibilityCheck"), 0);
}

#[tokio::test]
async fn test_invalid_model_skips_compatibility_endpoint() {
    let transport = MockTransport::new()
        .with_page(search_url("PS12345"), fixtures::part_page())
        .with_page(search_url("NOTAMODEL"), fixtures::page_of_type("Newfind"));
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("PS12345_+_NOTAMODEL").await.unwrap();

    assert_eq!(result, Compatibility::InvalidModel);
    assert_eq!(result.to_string(), "The provided model number is invalid.");
    assert_eq!(client.transport().call_count(), 2);
    assert_eq!(client.transport().calls_matching("PartCompatibilityCheck"), 0);
}

#[tokio::test]
async fn test_unsupported_appliance_still_checks_compatibility() {
    let transport = MockTransport::new()
        .with_page(search_url("PS12345"), fixtures::part_page())
        .with_page(
            search_url("WTW5000DW1"),
            fixtures::model_page("Whirlpool Washer WTW5000DW1", "Sections of the WTW5000DW1"),
        )
        .with_page(compat_url("WTW5000DW1", "12345"), "MODEL_PARTSKU_MATCH");
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("PS12345_+_WTW5000DW1").await.unwrap();

    assert_eq!(result, Compatibility::Compatible);
    assert_eq!(client.transport().calls_matching("PartCompatibilityCheck"), 1);
}

#[tokio::test]
async fn test_only_leading_ps_is_stripped() {
    let transport = MockTransport::new()
        .with_page(search_url("PSPS1234"), fixtures::part_page())
        .with_page(
            search_url("W987654"),
            fixtures::model_page("Dishwasher W987654", "Sections of the W987654"),
        )
        .with_page(compat_url("W987654", "PS1234"), "MODEL_PARTSKU_MATCH");
    let client = PartSelect::new(transport, BASE);

    let result = client.determine_compatibility("PSPS1234_+_W987654").await.unwrap();

    assert_eq!(result, Compatibility::Compatible);
    assert_eq!(client.transport().calls_matching("inventoryid=PS1234&"), 1);
}

#[tokio::test]
async fn test_part_without_prefix_is_sent_unchanged() {
    let transport = MockTransport::new()
        .with_page(search_url("WP2183037"), fixtures::part_page())
        .with_page(
            search_url("W987654"),
            fixtures::model_page("Refrigerator Model X", "Sections of the unit"),
        )
        .with_page(compat_url("W987654", "WP2183037"), "");
    let client = PartSelect::new(transport, BASE);

    let result = client.check_compatibility("WP2183037", "W987654").await.unwrap();

    assert_eq!(result, Compatibility::NotCompatible);
}

#[tokio::test]
async fn test_malformed_key_fails_without_network() {
    let client = PartSelect::new(MockTransport::new(), BASE);

    let err = client.determine_compatibility("PS12345 W987654").await.unwrap_err();
    assert!(matches!(err, Error::MalformedKey { occurrences: 0, .. }));

    let err = client.get_related_parts("a_+_b_+_c").await.unwrap_err();
    assert!(matches!(err, Error::MalformedKey { occurrences: 2, .. }));

    assert_eq!(client.transport().call_count(), 0);
}

#[tokio::test]
async fn test_compatibility_endpoint_failure_propagates() {
    let client = PartSelect::new(valid_pair_transport(), BASE);

    let err = client.determine_compatibility("PS12345_+_W987654").await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 404, .. }));
    assert_eq!(client.transport().call_count(), 3);
}

#[tokio::test]
async fn test_related_parts_url() {
    let transport = MockTransport::new().with_page(
        search_url("WDT780SAEM1"),
        fixtures::model_page("Whirlpool Dishwasher WDT780SAEM1", "Sections of the WDT780SAEM1"),
    );
    let client = PartSelect::new(transport, BASE);

    let result = client.get_related_parts("WDT780SAEM1_+_Rack").await.unwrap();

    assert_eq!(
        result,
        RelatedParts::Url(format!("{BASE}/Models/WDT780SAEM1/Parts/?SearchTerm=Rack"))
    );
    assert_eq!(result.to_string(), format!("{BASE}/Models/WDT780SAEM1/Parts/?SearchTerm=Rack"));
    // the URL is built, never fetched
    assert_eq!(client.transport().call_count(), 1);
}

#[tokio::test]
async fn test_related_parts_encodes_search_term() {
    let transport = MockTransport::new().with_page(
        search_url("WDT780SAEM1"),
        fixtures::model_page("Whirlpool Dishwasher WDT780SAEM1", "Sections of the WDT780SAEM1"),
    );
    let client = PartSelect::new(transport, BASE);

    let result = client.related_parts("WDT780SAEM1", "spray arm").await.unwrap();

    assert_eq!(
        result.url(),
        Some("https://www.partselect.com/Models/WDT780SAEM1/Parts/?SearchTerm=spray%20arm")
    );
}

#[tokio::test]
async fn test_related_parts_invalid_model() {
    let transport = MockTransport::new().with_page(search_url("NOPE"), fixtures::bare_page());
    let client = PartSelect::new(transport, BASE);

    let result = client.get_related_parts("NOPE_+_Rack").await.unwrap();

    assert_eq!(result, RelatedParts::InvalidModel);
    assert_eq!(result.to_string(), "Model number is invalid.");
    assert_eq!(result.url(), None);
}

#[tokio::test]
async fn test_related_parts_for_unsupported_appliance() {
    let transport = MockTransport::new().with_page(
        search_url("WTW5000DW1"),
        fixtures::model_page("Whirlpool Washer WTW5000DW1", "Sections of the WTW5000DW1"),
    );
    let client = PartSelect::new(transport, BASE);

    let result = client.get_related_parts("WTW5000DW1_+_Rack").await.unwrap();

    assert_eq!(
        result.url(),
        Some("https://www.partselect.com/Models/WTW5000DW1/Parts/?SearchTerm=Rack")
    );
    assert_eq!(client.transport().call_count(), 1);
}
