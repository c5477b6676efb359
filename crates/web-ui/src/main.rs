use buatevent_web::App;

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(api = %buatevent_web::services::ApiConfig::from_env().base_url(), "starting BuatEvent web");
    dioxus::launch(App);
}
