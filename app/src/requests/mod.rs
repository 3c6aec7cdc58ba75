mod create_show;

pub use create_show::{CreateShowRequest, THEATRE_ID_MESSAGE, TIME_MESSAGE, TITLE_MESSAGE};
