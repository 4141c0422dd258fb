pub mod auth;
pub mod health;
pub mod items;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::welcome)
        .service(auth::login)
        .service(users::register)
        .service(users::me)
        .service(items::list_items)
        .service(items::get_item)
        .service(items::create_item)
        .service(items::update_item)
        .service(items::delete_all_items)
        .service(items::delete_item);
}
