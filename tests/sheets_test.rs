mod common;

use common::FakeTransport;
use fitbit_tabular::{config::SheetsSecrets, ApiError, SheetsApi};
use serde_json::json;

fn sheets(transport: &FakeTransport) -> SheetsApi {
    let secrets = SheetsSecrets {
        access_token: "sheet-token".to_string(),
        spreadsheet_id: "sheet123".to_string(),
    };
    SheetsApi::with_transport(&secrets, Box::new(transport.clone()))
}

const METADATA: &str =
    r#"{"sheets":[{"properties":{"title":"Sleep logs"}},{"properties":{"title":"Stage stats"}}]}"#;

#[test]
fn reads_the_second_worksheet_as_records() {
    let transport = FakeTransport::new()
        .respond("/sheet123/values/Stage%20stats", r#"{
            "range": "'Stage stats'!A1:C3",
            "majorDimension": "ROWS",
            "values": [["stage", "seconds", "fraction"], ["deep", "30", "0.46"], ["wake", "15"]]
        }"#)
        .respond("/sheet123?fields=", METADATA);

    let records = sheets(&transport).get_all_records(1).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["stage"], json!("deep"));
    assert_eq!(records[0]["seconds"], json!(30));
    assert_eq!(records[0]["fraction"], json!(0.46));
    assert_eq!(records[1]["fraction"], json!(""));
    assert_eq!(transport.calls().len(), 2);
}

#[test]
fn empty_worksheet_has_no_records() {
    let transport = FakeTransport::new()
        .respond("/values/Sleep%20logs", r#"{"range": "'Sleep logs'!A1:Z1000", "majorDimension": "ROWS"}"#)
        .respond("/sheet123?fields=", METADATA);

    assert!(sheets(&transport).get_all_records(0).unwrap().is_empty());
}

#[test]
fn missing_worksheet_index() {
    let transport = FakeTransport::new().respond("/sheet123?fields=", METADATA);

    assert!(matches!(
        sheets(&transport).get_all_records(5),
        Err(ApiError::NoData(_))
    ));
}

#[test]
fn service_errors_are_reported() {
    let transport = FakeTransport::new().respond(
        "/sheet123",
        r#"{"error":{"code":401,"message":"Request had invalid authentication credentials.","status":"UNAUTHENTICATED"}}"#,
    );

    assert!(matches!(
        sheets(&transport).worksheet_titles(),
        Err(ApiError::Service(_))
    ));
}
