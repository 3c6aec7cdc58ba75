use crate::catalog::ShowCatalog;
use crate::requests::CreateShowRequest;
use marquee::{AppError, HttpResponse, Request, Response};

/// GET /shows
///
/// An empty catalog answers 404, which existing clients rely on.
pub async fn index(req: Request) -> Response {
    let catalog = req.state::<ShowCatalog>()?;
    let shows = catalog.all_shows()?;
    if shows.is_empty() {
        return Err(AppError::not_found("No shows found").into());
    }
    Ok(HttpResponse::try_json(&shows)?)
}

/// GET /shows/{id}
///
/// The id is the leading integer of the segment, so `/shows/4abc` is show 4.
pub async fn show(req: Request) -> Response {
    let catalog = req.state::<ShowCatalog>()?;
    let found = match leading_integer(req.param("id")?) {
        Some(id) => catalog.find_show(id)?,
        None => None,
    };
    let show = found.ok_or_else(|| AppError::not_found("Show not found"))?;
    Ok(HttpResponse::try_json(&show)?)
}

/// POST /shows
pub async fn store(req: Request) -> Response {
    let catalog = req.state::<ShowCatalog>()?;
    let new_show = req.validated::<CreateShowRequest>()?;
    let show = catalog.add_show(new_show)?;
    tracing::info!(show_id = show.show_id, title = %show.title, "show created");
    Ok(HttpResponse::try_json(&show)?.status(201))
}

/// Optional sign followed by ASCII digits at the start of `segment`
fn leading_integer(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::leading_integer;

    #[test]
    fn reads_the_leading_integer() {
        assert_eq!(leading_integer("4"), Some(4));
        assert_eq!(leading_integer("4abc"), Some(4));
        assert_eq!(leading_integer("4.0"), Some(4));
        assert_eq!(leading_integer("+4"), Some(4));
        assert_eq!(leading_integer("-2"), Some(-2));
        assert_eq!(leading_integer("007"), Some(7));
    }

    #[test]
    fn no_leading_digits_is_no_id() {
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("+-4"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }
}
