mod body;
mod form_request;
mod request;
mod response;

pub use body::{collect_limited, parse_json_object};
pub use form_request::FormRequest;
pub use request::Request;
pub use response::{HttpResponse, Response};
