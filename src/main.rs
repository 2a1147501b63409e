use tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    dioxus::launch(smart_todo::App);
}
