use std::fmt::Write;

use lead_search::backend::memory::InMemoryBackend;

/// Lead source assigned to the row with the given 1-based number.
pub fn source_for(row: usize) -> &'static str {
    match row % 3 {
        0 => "Web",
        1 => "Phone Inquiry",
        _ => "Partner Referral",
    }
}

/// CSV text with `rows` leads; companies alternate between Acme and Globex.
pub fn leads_csv(rows: usize) -> String {
    let mut csv = String::from("FirstName,LastName,Company,LeadSource,Status\n");
    for row in 1..=rows {
        let company = if row % 2 == 0 { "Globex" } else { "Acme" };
        writeln!(
            csv,
            "First{row},Last{row},{company},{},Open - Not Contacted",
            source_for(row)
        )
        .expect("writing to a String cannot fail");
    }
    csv
}

pub fn backend(rows: usize) -> InMemoryBackend {
    InMemoryBackend::from_csv_reader(leads_csv(rows).as_bytes()).expect("valid fixture csv")
}
