use serde::{Deserialize, Serialize};

/// Lead record as delivered by the remote lead service.
///
/// The view never inspects these fields; they are passed through to the
/// renderer as-is. Any attribute may be missing from a payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Lead {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub lead_source: Option<String>,
    pub status: Option<String>,
}

/// Column definition for the lead table.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct LeadColumn {
    pub label: &'static str,
    pub field_name: &'static str,
}

impl Lead {
    /// Columns rendered by the lead table, in display order.
    pub const COLUMNS: [LeadColumn; 5] = [
        LeadColumn {
            label: "First Name",
            field_name: "FirstName",
        },
        LeadColumn {
            label: "Last Name",
            field_name: "LastName",
        },
        LeadColumn {
            label: "Company",
            field_name: "Company",
        },
        LeadColumn {
            label: "Lead Source",
            field_name: "LeadSource",
        },
        LeadColumn {
            label: "Status",
            field_name: "Status",
        },
    ];

    /// Returns the displayed value for a column field name.
    pub fn field(&self, field_name: &str) -> Option<&str> {
        match field_name {
            "FirstName" => self.first_name.as_deref(),
            "LastName" => self.last_name.as_deref(),
            "Company" => self.company.as_deref(),
            "LeadSource" => self.lead_source.as_deref(),
            "Status" => self.status.as_deref(),
            _ => None,
        }
    }
}

/// Lead row as it appears in an imported CSV file, before an id is assigned.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewLead {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub lead_source: Option<String>,
    pub status: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl NewLead {
    /// Attaches an identifier, trimming text fields and dropping empty ones.
    #[must_use]
    pub fn into_lead(self, id: impl Into<String>) -> Lead {
        Lead {
            id: id.into(),
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            company: trimmed(self.company),
            lead_source: trimmed(self.lead_source),
            status: trimmed(self.status),
        }
    }
}
