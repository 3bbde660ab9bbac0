// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use inmates::domain::lookup::transport::FormTransport;
use inmates::infrastructure::http::ReqwestTransport;
use std::sync::Arc;
use std::time::Duration;

pub fn transport() -> Arc<dyn FormTransport> {
    Arc::new(ReqwestTransport::new("inmates-integration").with_timeout(Duration::from_secs(5)))
}

/// A TDCJ results page with one `<tr>` per `[name, number, unit, release]`.
pub fn tdcj_page(rows: &[[&str; 4]]) -> String {
    let rows: String = rows
        .iter()
        .map(|[name, number, unit, release]| {
            format!(
                "<tr><td><a href=\"/OffenderSearch/offenderDetail.action?sid={number}\">{name}</a></td>\
                 <td>{number}</td><td>W</td><td>M</td><td>{release}</td><td>{unit}</td></tr>"
            )
        })
        .collect();

    format!(
        "<html><head><title>Offender Search List</title></head><body>\
         <table class=\"ws\">\
         <tr><th>Name</th><th>TDCJ Number</th><th>Race</th><th>Gender</th>\
         <th>Projected Release Date</th><th>Unit of Assignment</th></tr>\
         {rows}</table></body></html>"
    )
}

pub fn fbop_body(entries: &[(&str, &str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = entries
        .iter()
        .map(|(num, facl, proj)| {
            serde_json::json!({
                "inmateNum": num,
                "nameFirst": "JOHN",
                "nameLast": "DOE",
                "faclCode": facl,
                "race": "White",
                "sex": "Male",
                "actRelDate": "",
                "projRelDate": proj,
            })
        })
        .collect();
    serde_json::json!({ "InmateLocator": entries }).to_string()
}
