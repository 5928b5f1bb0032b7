use crate::router::handle;
use crate::tests::utils::{body_bytes, get, test_app};

#[test]
fn export_returns_xlsx_attachment() {
    let app = test_app();

    let resp = handle(get("/export?destination=Manali&price=budget"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"accommodations_Manali.xlsx\"");

    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn export_with_no_matches_still_builds_a_workbook() {
    let app = test_app();

    let resp = handle(get("/export?destination=Darjeeling&price=premium"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_bytes(resp).starts_with(b"PK"));
}
