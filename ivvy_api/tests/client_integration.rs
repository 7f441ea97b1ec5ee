use std::time::Duration;

use chrono::NaiveDate;
use ivvy_api::types::{CloseOutStatus, InvoiceStatus};
use ivvy_api::transport::ReqwestTransport;
use ivvy_api::{Client, ClientConfig, ErrorKind, FilterSpec, JsonCodec, Page};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn get_venue_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("venue.json");

    Mock::given(method("GET"))
        .and(path("/venues/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let venue = client.venues().get_venue(7).await.unwrap();
    assert_eq!(venue.id, 7);
    assert_eq!(venue.currency.as_deref(), Some("AUD"));
}

#[tokio::test]
async fn list_rooms_reflects_requested_window() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("rooms.json");

    Mock::given(method("GET"))
        .and(path("/venues/7/rooms"))
        .and(query_param("perPage", "50"))
        .and(query_param("start", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let rooms = client
        .venues()
        .list_rooms(7, Page::new(50, 100))
        .await
        .unwrap();

    assert!(rooms.len() <= 20);
    assert_eq!(rooms.per_page, 50);
    assert_eq!(rooms.start, 100);
    assert_eq!(rooms.total_count, 120);
    assert_eq!(rooms.items[0].id, 31);
    assert_eq!(rooms.items[1].id, 30);
    assert!(!rooms.has_more());
}

#[tokio::test]
async fn list_invoices_sends_filter_after_pagination() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("invoices.json");

    Mock::given(method("GET"))
        .and(path("/invoices"))
        .and(query_param("perPage", "2"))
        .and(query_param("start", "0"))
        .and(query_param("currentStatus", "1"))
        .and(query_param("venueId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let filter = FilterSpec::new()
        .with("currentStatus", i64::from(InvoiceStatus::UnconfirmedPaid))
        .with("venueId", 7);
    let invoices = client
        .invoices()
        .list_invoices(Page::new(2, 0), Some(&filter))
        .await
        .unwrap();

    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices.total_count, 3);
    assert_eq!(invoices.next_page(), Some(Page::new(2, 2)));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("perPage=2&start=0&currentStatus=1&venueId=7")
    );
}

#[tokio::test]
async fn next_page_is_an_explicit_second_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/email-logs"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"meta": {"totalResults": 2}, "results": [{"id": "em-1"}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/email-logs"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"meta": {"totalResults": 2}, "results": [{"id": "em-2"}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let logs = client.email_logs();
    let first = logs.list_email_logs(Page::new(1, 0), None).await.unwrap();
    assert_eq!(first.items[0].id, "em-1");

    let next = first.next_page().unwrap();
    let second = logs.list_email_logs(next, None).await.unwrap();
    assert_eq!(second.items[0].id, "em-2");
    assert_eq!(second.next_page(), None);
}

#[tokio::test]
async fn accommodation_list_sends_no_window() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("accommodation.json");

    Mock::given(method("GET"))
        .and(path("/venues/7/bookings/501/accommodation"))
        .and(query_param_is_missing("perPage"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let groups = client
        .venues()
        .list_booking_accommodation(7, 501)
        .await
        .unwrap();
    assert_eq!(groups.per_page, 1);
    assert_eq!(groups.start, 0);
    assert_eq!(groups.items[0].num_rooms, Some(10));
}

#[tokio::test]
async fn room_reservations_for_one_booking() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/7/room-reservations"))
        .and(query_param("bookingId", "501"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"meta": {"totalResults": 1}, "results": [{
                "id": 1, "bookingId": 501, "roomId": 31,
                "arrivalDate": "2024-06-09", "departureDate": "2024-06-12",
                "guestName": "Dana Okafor"
            }]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let reservations = client
        .venues()
        .list_room_reservations(7, Page::default(), Some(501), None)
        .await
        .unwrap();
    assert_eq!(reservations.items[0].nights(), 3);
}

#[tokio::test]
async fn account_bookings_and_single_booking() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bookings.json");

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/venues/7/bookings/502"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": 502, "venueId": 7, "name": "Board Dinner", "currentStatus": 4}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let venues = client.venues();
    let bookings = venues
        .list_account_bookings(Page::new(10, 0), None)
        .await
        .unwrap();
    assert_eq!(bookings.len(), 2);

    let booking = venues.get_booking(7, 502).await.unwrap();
    assert_eq!(
        booking.current_status,
        ivvy_api::types::BookingStatus::Cancelled
    );
}

#[tokio::test]
async fn set_room_counts_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/venues/7/rooms/31/counts"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "startDate": "2024-06-01",
            "endDate": "2024-06-30",
            "roomCount": 8
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .venues()
        .set_room_counts(7, 31, date(2024, 6, 1), date(2024, 6, 30), 8)
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn dynamic_rates_set_and_remove() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/venues/7/rate-plans/4/rooms/31/dynamic-rates"))
        .and(body_json(serde_json::json!({
            "startDate": "2024-06-01",
            "endDate": "2024-06-02",
            "cost": 249.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/venues/7/rate-plans/4/rooms/31/dynamic-rates"))
        .and(query_param("startDate", "2024-06-01"))
        .and(query_param("endDate", "2024-06-02"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let venues = client.venues();
    assert!(venues
        .set_room_dynamic_rates(7, 4, 31, date(2024, 6, 1), date(2024, 6, 2), 249.5)
        .await
        .unwrap()
        .success);
    assert!(venues
        .remove_room_dynamic_rates(7, 4, 31, date(2024, 6, 1), date(2024, 6, 2))
        .await
        .unwrap()
        .success);
}

#[tokio::test]
async fn non_finite_rate_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .venues()
        .set_room_dynamic_rates(7, 4, 31, date(2024, 6, 1), date(2024, 6, 2), f64::INFINITY)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn rate_plan_rules_send_close_out_status_as_integer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/venues/7/rate-plans/4/rooms/31/rules"))
        .and(body_json(serde_json::json!({
            "startDate": "2024-12-24",
            "endDate": "2024-12-26",
            "closeOutStatus": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .venues()
        .set_rate_plan_rules(
            7,
            4,
            31,
            date(2024, 12, 24),
            date(2024, 12, 26),
            CloseOutStatus::Closed,
        )
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.venues().get_venue(7).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn wrong_shape_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices/INV-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": "INV-1", "currentStatus": 9, "refType": 0}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.invoices().get_invoice("INV-1").await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn vendor_error_envelope_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"code": "E1", "message": "Not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.venues().get_venue(99).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some("E1"));
    assert_eq!(err.message(), Some("Not found"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn undecodable_error_body_is_transport_error_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .invoices()
        .list_invoices(Page::default(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), None);
}

#[tokio::test]
async fn timeout_is_transport_error_without_vendor_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("venue.json"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = Client::new(config).unwrap();
    let err = client.venues().get_venue(7).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), None);
}

#[tokio::test]
async fn authorization_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/7"))
        .and(header("authorization", "IWS1 key:secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("venue.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&mock_server.uri())
        .with_authorization("IWS1 key:secret");
    let client = Client::new(config).unwrap();
    assert!(client.venues().get_venue(7).await.is_ok());
}

#[tokio::test]
async fn list_room_options_exposes_next_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("room_options.json");

    Mock::given(method("GET"))
        .and(path("/venues/7/room-options"))
        .and(query_param("perPage", "2"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let options = client
        .venues()
        .list_room_options(7, Page::new(2, 0))
        .await
        .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options.items[0].max_occupants, Some(2));
    assert_eq!(options.items[1].description, None);
    assert!(options.has_more());
    assert_eq!(options.next_page(), Some(Page::new(2, 2)));
}

#[tokio::test]
async fn list_rate_plans_decodes_room_ids() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("rate_plans.json");

    Mock::given(method("GET"))
        .and(path("/venues/7/rate-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let plans = client
        .venues()
        .list_rate_plans(7, Page::default())
        .await
        .unwrap();

    assert_eq!(plans.total_count, 1);
    assert_eq!(plans.per_page, 100);
    assert_eq!(plans.items[0].room_ids, vec![30, 31]);
    assert_eq!(plans.next_page(), None);
}

#[tokio::test]
async fn list_bookings_for_venue_with_filter() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("bookings.json");

    Mock::given(method("GET"))
        .and(path("/venues/7/bookings"))
        .and(query_param("perPage", "10"))
        .and(query_param("currentStatus", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let filter = FilterSpec::new().with("currentStatus", 3);
    let bookings = client
        .venues()
        .list_bookings(7, Page::new(10, 0), Some(&filter))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings.items[0].id, 501);
}

#[tokio::test]
async fn caller_supplied_reqwest_client_is_used() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("venue.json");

    Mock::given(method("GET"))
        .and(path("/venues/7"))
        .and(header("x-trace", "kickoff"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-trace", reqwest::header::HeaderValue::from_static("kickoff"));
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();
    let client = Client::with_collaborators(
        ClientConfig::default().with_base_url(&mock_server.uri()),
        ReqwestTransport::from_client(http),
        JsonCodec,
    );

    let venue = client.venues().get_venue(7).await.unwrap();
    assert_eq!(venue.id, 7);
}
