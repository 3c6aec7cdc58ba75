use crate::models::NewShow;
use marquee::{FormRequest, FrameworkError};
use serde::Deserialize;
use serde_json::Value;

pub const TITLE_MESSAGE: &str = "Show title should be present and should be string";
pub const THEATRE_ID_MESSAGE: &str = "Theatre id should be present and should be a number";
pub const TIME_MESSAGE: &str = "Show time should be present and should be string";

/// Body of `POST /shows`
///
/// Fields stay untyped until validation so a wrong type is reported with the
/// same message as a missing field. Unknown fields, including `showId`, are
/// ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub theatre_id: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
}

impl FormRequest for CreateShowRequest {
    type Validated = NewShow;

    /// Checks title, then theatreId, then time; the first failure wins
    fn validate(self) -> Result<NewShow, FrameworkError> {
        let title = non_empty_string(self.title)
            .ok_or_else(|| FrameworkError::field("title", TITLE_MESSAGE))?;

        let theatre_id = self
            .theatre_id
            .as_ref()
            .and_then(whole_number)
            .filter(|id| *id != 0)
            .ok_or_else(|| FrameworkError::field("theatreId", THEATRE_ID_MESSAGE))?;

        let time = non_empty_string(self.time)
            .ok_or_else(|| FrameworkError::field("time", TIME_MESSAGE))?;

        Ok(NewShow {
            title,
            theatre_id,
            time,
        })
    }
}

/// Any JSON number with no fractional part, so `2`, `2.0` and `2e0` agree
fn whole_number(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(id) = number.as_i64() {
        return Some(id);
    }
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(body: Value) -> Result<NewShow, FrameworkError> {
        serde_json::from_value::<CreateShowRequest>(body)
            .unwrap()
            .validate()
    }

    fn failed_field(body: Value) -> (String, String) {
        match validate(body) {
            Err(FrameworkError::Field { field, message }) => (field, message),
            other => panic!("expected a field error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_a_complete_show() {
        let show = validate(json!({
            "title": "Phantom of the Opera",
            "theatreId": 2,
            "time": "5:00 PM"
        }))
        .unwrap();

        assert_eq!(
            show,
            NewShow {
                title: "Phantom of the Opera".to_string(),
                theatre_id: 2,
                time: "5:00 PM".to_string(),
            }
        );
    }

    #[test]
    fn reports_each_missing_field() {
        assert_eq!(
            failed_field(json!({ "theatreId": 2, "time": "5:00 PM" })),
            ("title".to_string(), TITLE_MESSAGE.to_string())
        );
        assert_eq!(
            failed_field(json!({ "title": "Phantom of the Opera", "time": "5:00 PM" })),
            ("theatreId".to_string(), THEATRE_ID_MESSAGE.to_string())
        );
        assert_eq!(
            failed_field(json!({ "title": "Phantom of the Opera", "theatreId": 2 })),
            ("time".to_string(), TIME_MESSAGE.to_string())
        );
    }

    #[test]
    fn first_failure_wins() {
        let (field, _) = failed_field(json!({}));
        assert_eq!(field, "title");

        let (field, _) = failed_field(json!({ "title": "Wicked", "theatreId": "3" }));
        assert_eq!(field, "theatreId");
    }

    #[test]
    fn rejects_wrong_types_and_falsy_values() {
        assert_eq!(failed_field(json!({ "title": 7, "theatreId": 1, "time": "x" })).0, "title");
        assert_eq!(failed_field(json!({ "title": "", "theatreId": 1, "time": "x" })).0, "title");
        assert_eq!(failed_field(json!({ "title": null, "theatreId": 1, "time": "x" })).0, "title");
        assert_eq!(failed_field(json!({ "title": "x", "theatreId": 0, "time": "x" })).0, "theatreId");
        assert_eq!(failed_field(json!({ "title": "x", "theatreId": 0.0, "time": "x" })).0, "theatreId");
        assert_eq!(failed_field(json!({ "title": "x", "theatreId": 2.5, "time": "x" })).0, "theatreId");
        assert_eq!(failed_field(json!({ "title": "x", "theatreId": 1, "time": 1900 })).0, "time");
        assert_eq!(failed_field(json!({ "title": "x", "theatreId": 1, "time": "" })).0, "time");
    }

    #[test]
    fn accepts_whole_numbers_written_as_floats() {
        for theatre_id in [json!(2.0), json!(2e0), serde_json::from_str::<Value>("2.000").unwrap()] {
            let show = validate(json!({ "title": "Cats", "theatreId": theatre_id, "time": "3:00 PM" }))
                .unwrap();
            assert_eq!(show.theatre_id, 2);
        }
    }

    #[test]
    fn ignores_a_client_supplied_id() {
        let show = validate(json!({
            "showId": 99,
            "title": "Cats",
            "theatreId": 1,
            "time": "3:00 PM"
        }))
        .unwrap();
        assert_eq!(show.with_id(5).show_id, 5);
    }
}
