
use actix_web::{http::StatusCode, test, App};
use serde_json::Value;

use portfolio_api::routes::configure_routes;
use test_utils::*;

const BOUNDARY: &str = "----portfolio-test-boundary";

// Minimal PNG signature so the encoder can sniff the type.
const PNG_MAGIC: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

fn multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

#[actix_rt::test]
async fn upload_returns_inline_encoded_image() {
    let state = test_state();
    let token = admin_token(&state);
    let app = test::init_service(
        App::new().app_data(state.clone()).configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/images")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(&[("shot.png", PNG_MAGIC)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let data_url = body["data_url"].as_str().unwrap();
    assert!(data_url.starts_with("data:image/png;base64,"));
}

#[actix_rt::test]
async fn latest_of_several_files_wins() {
    let state = test_state();
    let token = admin_token(&state);
    let app = test::init_service(
        App::new().app_data(state.clone()).configure(configure_routes),
    )
    .await;

    let stale: &[u8] = b"stale selection";
    let req = test::TestRequest::post()
        .uri("/api/images")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(&[("old.png", stale), ("new.png", PNG_MAGIC)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    // The PNG magic is only in the second file; its encoding must win.
    let data_url = body["data_url"].as_str().unwrap();
    let payload = data_url.split(";base64,").nth(1).unwrap();
    let decoded = {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.decode(payload).unwrap()
    };
    assert_eq!(decoded, PNG_MAGIC);
}

#[actix_rt::test]
async fn upload_requires_a_session_token() {
    let state = test_state();
    let app = test::init_service(
        App::new().app_data(state.clone()).configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/images")
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(&[("shot.png", PNG_MAGIC)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn empty_upload_is_a_bad_request() {
    let state = test_state();
    let token = admin_token(&state);
    let app = test::init_service(
        App::new().app_data(state.clone()).configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/images")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(&[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
