use serde::{Deserialize, Serialize};

/// A venue; read-only reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    pub theatre_id: i64,
    pub name: String,
    pub location: String,
}

pub fn seed() -> Vec<Theatre> {
    [
        (1, "Regal Cinemas", "Downtown"),
        (2, "AMC Theatres", "Midtown"),
        (3, "Cinemark", "Uptown"),
    ]
    .into_iter()
    .map(|(theatre_id, name, location)| Theatre {
        theatre_id,
        name: name.to_string(),
        location: location.to_string(),
    })
    .collect()
}
