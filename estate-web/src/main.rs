//! Villa listing site

use dioxus::logger::tracing::Level;
use estate_web::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
