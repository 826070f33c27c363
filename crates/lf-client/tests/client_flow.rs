//! End-to-end client behaviour against a mock Labfolder server.

use lf_client::{ClientError, LabfolderClient};
use lf_core::{
    CellValue, DataElement, DataItem, Element, ElementKind, Entry, Frame, TableElement, TextElement,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-abc";

fn me_body() -> serde_json::Value {
    json!({
        "user": {"id": 21, "first_name": "Daniel", "last_name": "Parthier", "email": "dp@example.org"},
        "user_settings": {"zone_id": "Europe/Berlin"}
    })
}

async fn mount_me(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/me"))
        .and(query_param("expand", "user"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .mount(server)
        .await;
}

fn authed(server: &MockServer) -> LabfolderClient {
    LabfolderClient::new(&server.uri())
        .expect("client")
        .with_token(TOKEN)
}

#[tokio::test]
async fn login_stores_token_and_fetches_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .and(body_json(json!({"user": "dp@example.org", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;
    mount_me(&server).await;

    let mut client = LabfolderClient::new(&server.uri()).expect("client");
    let user = client.login("dp@example.org", "pw").await.expect("login");

    assert_eq!(client.token(), Some(TOKEN));
    assert_eq!(user.id, "21");
    assert_eq!(user.initials, "DP");
    assert_eq!(user.location, "Europe/Berlin");
    assert_eq!(client.user(), Some(&user));
}

#[rstest]
#[case(400)]
#[case(401)]
#[case(403)]
#[case(500)]
#[tokio::test]
async fn login_failures_map_to_typed_errors(#[case] status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .mount(&server)
        .await;

    let mut client = LabfolderClient::new(&server.uri()).expect("client");
    let err = client.login("dp@example.org", "bad").await.unwrap_err();
    assert!(client.token().is_none());
    match status {
        400 => assert!(matches!(err, ClientError::BadRequest(ref body) if body == "nope")),
        401 => assert!(matches!(err, ClientError::InvalidCredentials)),
        403 => assert!(matches!(err, ClientError::LoginBlocked)),
        _ => assert!(matches!(err, ClientError::Api { status: 500, .. })),
    }
}

#[tokio::test]
async fn logout_clears_token_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = authed(&server);
    client.logout().await.expect("logout");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn logout_failure_keeps_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = authed(&server);
    let err = client.logout().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 200, .. }));
    assert_eq!(client.token(), Some(TOKEN));
}

#[tokio::test]
async fn requests_without_token_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = LabfolderClient::new(&server.uri()).expect("client");
    assert!(matches!(
        client.get_text("1").await,
        Err(ClientError::NotAuthenticated)
    ));
    assert!(matches!(
        client.current_user().await,
        Err(ClientError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn get_entry_fetches_elements_in_order_and_skips_unknown_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/entries/118"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 118,
            "title": "Patch clamp",
            "author_id": 21,
            "project_id": 3,
            "tags": ["ephys"],
            "creation_date": "2024-05-02T10:00:00.000+02:00",
            "elements": [
                {"id": 1, "type": "TEXT"},
                {"id": 2, "type": "SKETCH"},
                {"id": 3, "type": "TABLE"},
                {"id": 4, "type": "DATA_ELEMENT_GROUP"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/text/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "entry_id": 118, "content": "<p>hi</p>"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/table/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "entry_id": 118,
            "title": "Rin",
            "content": {"sheets": {"Sheet1": {"name": "Sheet1", "data": {"dataTable": {
                "0": {"0": {"value": "cell"}, "1": {"value": "rin"}},
                "1": {"0": {"value": "c1"}, "1": {"value": 180.5}}
            }}}}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/data/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "entry_id": 118,
            "data_elements": [{"type": "DESCRIPTIVE_DATA_ELEMENT", "title": "Solution", "description": "ACSF"}]
        })))
        .mount(&server)
        .await;

    let client = authed(&server);
    let detail = client.get_entry("118", true).await.expect("entry");

    assert_eq!(detail.entry.id.as_deref(), Some("118"));
    assert_eq!(detail.entry.tags, ["ephys"]);
    let kinds: Vec<ElementKind> = detail.elements.iter().map(Element::kind).collect();
    assert_eq!(
        kinds,
        [ElementKind::Text, ElementKind::Table, ElementKind::Data]
    );
    let Element::Table(table) = &detail.elements[1] else {
        panic!("expected a table");
    };
    assert_eq!(table.sheets["Sheet1"].columns(), ["cell", "rin"]);

    let raw = client.get_entry_raw("118").await.expect("raw entry");
    assert_eq!(raw.elements.len(), 3);
    assert_eq!(raw.elements[0].body["content"], json!("<p>hi</p>"));
}

#[tokio::test]
async fn create_entry_uses_current_user_as_author() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v2/entries"))
        .and(body_json(json!({
            "title": "Day 1",
            "author_id": "21",
            "project_id": "3",
            "tags": ["a", "b"],
            "elements": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 900})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut entry = Entry::draft("3", "Day 1");
    entry.add_tags(["a", "b", "a"]);
    let id = client.create_entry(&mut entry).await.expect("create");

    assert_eq!(id, "900");
    assert_eq!(entry.id.as_deref(), Some("900"));
    assert_eq!(entry.author_id.as_deref(), Some("21"));
}

#[tokio::test]
async fn update_entry_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = authed(&server);
    let err = client
        .update_entry(&Entry::draft("3", "Day 1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Core(_)));
}

#[tokio::test]
async fn update_entry_puts_unlocked_entry() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/entries/900"))
        .and(body_json(json!({
            "title": "Day 1 (rev)",
            "author_id": null,
            "project_id": "3",
            "tags": [],
            "elements": [],
            "locked": false
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut entry = Entry::draft("3", "Day 1 (rev)");
    entry.id = Some("900".into());
    client.update_entry(&entry).await.expect("update");
}

#[tokio::test]
async fn create_text_falls_back_to_own_entry_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/elements/text"))
        .and(body_json(json!({"entry_id": "118", "content": "<p>note</p>"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "55"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut text = TextElement::new("<p>note</p>");
    text.entry_id = Some("118".into());
    let id = client.create_text("", &mut text).await.expect("create");
    assert_eq!(id, "55");
    assert_eq!(text.id.as_deref(), Some("55"));
    assert_eq!(text.entry_id.as_deref(), Some("118"));
}

#[tokio::test]
async fn create_with_wrong_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/elements/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut data = DataElement::default();
    data.push(DataItem::descriptive("Solution", "ACSF"));
    let err = client.create_data("118", &mut data).await.unwrap_err();
    match err {
        ClientError::Rejected {
            kind,
            action,
            status,
            ..
        } => {
            assert_eq!(kind, "DATA");
            assert_eq!(action, "written to");
            assert_eq!(status, 200);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(data.id.is_none());
}

#[tokio::test]
async fn update_text_requires_content() {
    let server = MockServer::start().await;
    let client = authed(&server);
    let mut text = TextElement::default();
    text.id = Some("55".into());
    assert!(matches!(
        client.update_text(&text).await,
        Err(ClientError::Core(_))
    ));
}

#[tokio::test]
async fn update_table_round_trips_fetched_sheets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/table/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "entry_id": 118,
            "title": "Rin",
            "content": {"sheets": {"Sheet1": {"data": {"dataTable": {
                "0": {"0": {"value": "cell"}},
                "2": {"0": {"value": "c1"}}
            }}}}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/elements/table/3"))
        .and(body_json(json!({
            "entry_id": "118",
            "id": "3",
            "content": {"sheets": {"Sheet1": {
                "name": "Sheet1",
                "rowCount": 2,
                "columnCount": 1,
                "data": {"dataTable": {
                    "0": {"0": {"value": "cell"}},
                    "1": {"0": {"value": "c1"}}
                }}
            }}},
            "locked": false
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let table = client.get_table("3", true).await.expect("table");
    client.update_table(&table, true).await.expect("update");
}

#[tokio::test]
async fn get_image_fetches_original_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/image/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "title": "slice.jpg",
            "original_file_content_type": "image/jpeg"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/image/8/original-data"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8, 0xff]))
        .mount(&server)
        .await;

    let client = authed(&server);
    let image = client.get_image("8").await.expect("image");
    assert_eq!(image.extension(), "jpg");
    assert_eq!(image.data.as_deref(), Some(&[0xff, 0xd8, 0xff][..]));
}

#[tokio::test]
async fn rate_limited_reads_report_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/file/9"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let client = authed(&server);
    assert!(matches!(
        client.get_file("9").await,
        Err(ClientError::RateLimited { retry_after_secs: 7 })
    ));
}

#[tokio::test]
async fn empty_ids_fail_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = authed(&server);
    assert!(matches!(client.get_entry("", true).await, Err(ClientError::Core(_))));
    assert!(matches!(client.get_well_plate(" ").await, Err(ClientError::Core(_))));
    assert!(matches!(client.get_image("").await, Err(ClientError::Core(_))));
}

#[tokio::test]
async fn login_without_token_is_unexpected_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"expires": 3600})))
        .mount(&server)
        .await;

    let mut client = LabfolderClient::new(&server.uri()).expect("client");
    let err = client.login("dp@example.org", "pw").await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedResponse(_)), "{err:?}");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn create_table_posts_sheets_and_records_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/elements/table"))
        .and(body_json(json!({
            "entry_id": "118",
            "title": "Rin",
            "content": {"sheets": {"Sheet1": {
                "name": "Sheet1",
                "rowCount": 2,
                "columnCount": 2,
                "data": {"dataTable": {
                    "0": {"0": {"value": "cell"}, "1": {"value": "rin"}},
                    "1": {"0": {"value": "c1"}, "1": {"value": 210}}
                }}
            }}},
            "locked": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 77})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut table = TableElement::new("Rin");
    table.add_sheet(
        "Sheet1",
        Frame::new(
            vec!["cell".into(), "rin".into()],
            vec![vec![
                Some(CellValue::Text("c1".into())),
                Some(CellValue::Integer(210)),
            ]],
        )
        .expect("frame"),
    );
    let id = client.create_table("118", &mut table, true).await.expect("create");
    assert_eq!(id, "77");
    assert_eq!(table.id.as_deref(), Some("77"));
    assert_eq!(table.entry_id.as_deref(), Some("118"));
}

#[tokio::test]
async fn create_data_posts_nested_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/elements/data"))
        .and(body_json(json!({
            "entry_id": "118",
            "description": "ACSF bath",
            "data_elements": [{
                "type": "DATA_ELEMENT_GROUP",
                "title": "Recording",
                "children": [{
                    "type": "SINGLE_DATA_ELEMENT",
                    "title": "Temperature",
                    "value": 32.5,
                    "unit": "°C"
                }]
            }],
            "locked": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "640"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut data = DataElement::with_description("ACSF bath");
    data.push(DataItem::group(
        "Recording",
        vec![DataItem::single("Temperature", Some(32.5), Some("°C".into()))],
    ));
    let id = client.create_data("118", &mut data).await.expect("create");
    assert_eq!(id, "640");
    assert_eq!(data.id.as_deref(), Some("640"));
    assert_eq!(data.entry_id.as_deref(), Some("118"));
}

#[tokio::test]
async fn update_data_puts_items_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/elements/data/640"))
        .and(body_json(json!({
            "id": "640",
            "data_elements": [{
                "type": "DESCRIPTIVE_DATA_ELEMENT",
                "title": "Solution",
                "description": "ACSF"
            }],
            "locked": false
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let mut data = DataElement::default();
    data.id = Some("640".into());
    data.push(DataItem::descriptive("Solution", "ACSF"));
    client.update_data(&data).await.expect("update");
}

#[tokio::test]
async fn get_file_reads_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/file/9"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "entry_id": "118",
            "file_name": "trace.abf",
            "file_size": 2048,
            "content_type": "application/octet-stream"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let file = client.get_file("9").await.expect("file");
    assert_eq!(file.id.as_deref(), Some("9"));
    assert_eq!(file.entry_id.as_deref(), Some("118"));
    assert_eq!(file.file_name.as_deref(), Some("trace.abf"));
    assert_eq!(file.file_size, Some(2048));
}

#[tokio::test]
async fn get_well_plate_keeps_body() {
    let server = MockServer::start().await;
    let body = json!({"id": 12, "title": "Plate 1", "content": {"rows": 8, "columns": 12}});
    Mock::given(method("GET"))
        .and(path("/api/v2/elements/well-plate/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let plate = client.get_well_plate("12").await.expect("well plate");
    assert_eq!(plate.id.as_deref(), Some("12"));
    assert_eq!(plate.body, body);
}
