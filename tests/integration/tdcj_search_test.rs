// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{tdcj_page, transport};
use chrono::NaiveDate;
use inmates::domain::lookup::provider::LookupError;
use inmates::domain::lookup::transport::TransportError;
use inmates::domain::models::inmate::{Jurisdiction, ReleaseDate};
use inmates::infrastructure::providers::tdcj::{self, SearchClient};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, body: String) {
    Mock::given(method("POST"))
        .and(path("/OffenderSearch/search.action"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_query_by_name_posts_form_and_normalizes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/OffenderSearch/search.action"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("firstName=John"))
        .and(body_string_contains("lastName=Smith"))
        .and(body_string_contains("btnSearch=Search"))
        .and(body_string_contains("page=index"))
        .respond_with(ResponseTemplate::new(200).set_body_string(tdcj_page(&[
            ["Smith, John", "00012345", "Huntsville", "2030-01-01"],
            ["SMITH,JOHNNY RAY", "00054321", "Byrd", "LIFE"],
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SearchClient::new(transport(), server.uri());
    let records = client.query_by_name("John", "Smith").await.unwrap();

    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.id, "00012345");
    assert_eq!(first.jurisdiction, Jurisdiction::Texas);
    assert_eq!(first.first_name, "John");
    assert_eq!(first.last_name, "Smith");
    assert_eq!(first.unit.as_deref(), Some("Huntsville"));
    assert_eq!(
        first.release,
        ReleaseDate::Date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
    );
    assert_eq!(
        first.url,
        Some(format!(
            "{}/OffenderSearch/offenderDetail.action?sid=00012345",
            server.uri()
        ))
    );

    let second = &records[1];
    assert_eq!(second.first_name, "JOHNNY");
    assert_eq!(second.last_name, "SMITH");
    assert_eq!(second.release, ReleaseDate::RawText("LIFE".to_string()));
}

#[tokio::test]
async fn test_error_page_is_treated_as_no_results() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "<html><head><title>Offender Search</title></head><body>\
         <span class=\"error\">Please enter search criteria</span></body></html>"
            .to_string(),
    )
    .await;

    let client = SearchClient::new(transport(), server.uri());
    assert!(client.query_by_name("", "").await.unwrap().is_empty());
    assert!(client.query_by_identifier(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_identifier_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/OffenderSearch/search.action"))
        .and(body_string_contains("tdcj=00012345"))
        .respond_with(ResponseTemplate::new(200).set_body_string(tdcj_page(&[[
            "Smith, John",
            "00012345",
            "Huntsville",
            "2030-01-01",
        ]])))
        .mount(&server)
        .await;

    let client = SearchClient::new(transport(), server.uri());
    let formatted = tdcj::format_identifier(12345).unwrap();
    let record = client
        .query_by_identifier(&formatted)
        .await
        .unwrap()
        .expect("record for known identifier");

    assert_eq!(record.id, formatted);
}

#[tokio::test]
async fn test_duplicate_rows_for_identifier_is_inconsistency() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        tdcj_page(&[
            ["Smith, John", "00012345", "Huntsville", "2030-01-01"],
            ["Smith, John", "00012345", "Byrd", "2030-01-01"],
        ]),
    )
    .await;

    let client = SearchClient::new(transport(), server.uri());
    let err = client.query_by_identifier("12345").await.unwrap_err();
    assert!(matches!(
        err,
        LookupError::UpstreamInconsistency { count: 2, .. }
    ));
}

#[tokio::test]
async fn test_invalid_identifier_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SearchClient::new(transport(), server.uri());
    for raw in ["abc", "12-34", "1.0", ""] {
        assert!(matches!(
            client.query_by_identifier(raw).await,
            Err(LookupError::InvalidIdentifier { .. })
        ));
    }
}

#[tokio::test]
async fn test_unreachable_site_surfaces_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SearchClient::new(transport(), format!("http://{}", addr));
    let err = client.query_by_name("John", "Smith").await.unwrap_err();
    assert!(matches!(
        err,
        LookupError::Transport(TransportError::Connect(_))
    ));
}
