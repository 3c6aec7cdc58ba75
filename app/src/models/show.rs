use serde::{Deserialize, Serialize};

/// A scheduled show at a theatre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub show_id: i64,
    pub title: String,
    /// Refers to a [`Theatre`](super::Theatre); never checked
    pub theatre_id: i64,
    /// Free-form, e.g. "7:00 PM"
    pub time: String,
}

/// A validated show that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub title: String,
    pub theatre_id: i64,
    pub time: String,
}

impl NewShow {
    pub fn with_id(self, show_id: i64) -> Show {
        Show {
            show_id,
            title: self.title,
            theatre_id: self.theatre_id,
            time: self.time,
        }
    }
}

/// Shows the catalog starts with
pub fn seed() -> Vec<Show> {
    [
        (1, "The Lion King", 1, "7:00 PM"),
        (2, "Hamilton", 2, "8:00 PM"),
        (3, "Wicked", 3, "9:00 PM"),
        (4, "Les Misérables", 1, "6:00 PM"),
    ]
    .into_iter()
    .map(|(show_id, title, theatre_id, time)| Show {
        show_id,
        title: title.to_string(),
        theatre_id,
        time: time.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let show = NewShow {
            title: "Cats".to_string(),
            theatre_id: 3,
            time: "2:00 PM".to_string(),
        }
        .with_id(9);

        assert_eq!(
            serde_json::to_value(&show).unwrap(),
            json!({ "showId": 9, "title": "Cats", "theatreId": 3, "time": "2:00 PM" })
        );
    }

    #[test]
    fn seed_ids_are_sequential() {
        let ids: Vec<i64> = seed().iter().map(|s| s.show_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
