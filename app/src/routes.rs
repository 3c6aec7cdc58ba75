use marquee::{get, post, routes};

use crate::controllers;

routes! {
    get!("/shows", controllers::shows::index).name("shows.index"),
    get!("/shows/{id}", controllers::shows::show).name("shows.show"),
    post!("/shows", controllers::shows::store).name("shows.store"),
}
