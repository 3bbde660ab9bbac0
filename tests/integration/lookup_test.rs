// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{fbop_body, tdcj_page, transport};
use inmates::domain::lookup::provider::InmateProvider;
use inmates::domain::models::inmate::Jurisdiction;
use inmates::infrastructure::providers::{FbopClient, Lookup, SearchClient};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_both(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/OffenderSearch/search.action"))
        .respond_with(ResponseTemplate::new(200).set_body_string(tdcj_page(&[[
            "Doe, John",
            "01234567",
            "Byrd",
            "2030-01-01",
        ]])))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/inmateloc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fbop_body(&[("01234-567", "BML", "01/01/2099")])),
        )
        .mount(server)
        .await;
}

fn lookup(tdcj_base: String, fbop_url: String) -> Lookup {
    let transport = transport();
    let providers: Vec<Arc<dyn InmateProvider>> = vec![
        Arc::new(SearchClient::new(transport.clone(), tdcj_base)),
        Arc::new(FbopClient::new(transport, fbop_url)),
    ];
    Lookup::new(providers)
}

#[tokio::test]
async fn test_identifier_lookup_across_jurisdictions() {
    let server = MockServer::start().await;
    mount_both(&server).await;

    let lookup = lookup(server.uri(), format!("{}/inmateloc", server.uri()));
    let report = lookup
        .query_by_identifier("1234567", &[Jurisdiction::Texas, Jurisdiction::Federal])
        .await
        .unwrap();

    assert!(report.errors.is_empty());
    let ids: Vec<&str> = report.inmates.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["01234567", "01234-567"]);
}

#[tokio::test]
async fn test_timed_out_provider_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/OffenderSearch/search.action"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(tdcj_page(&[]))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/inmateloc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fbop_body(&[("01234-567", "BML", "01/01/2099")])),
        )
        .mount(&server)
        .await;

    let lookup = lookup(server.uri(), format!("{}/inmateloc", server.uri()));
    let report = lookup.query_by_name("John", "Doe").await.unwrap();

    assert_eq!(report.inmates.len(), 1);
    assert_eq!(report.inmates[0].jurisdiction, Jurisdiction::Federal);
    assert_eq!(
        report.errors,
        vec!["TDCJ query returned Timeout request exception".to_string()]
    );
}
