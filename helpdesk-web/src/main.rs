use helpdesk_web::config::AppConfig;
use helpdesk_web::App;

fn main() {
    let config = AppConfig::load();
    if let Err(e) = dioxus::logger::init(config.tracing_level()) {
        eprintln!("Failed to initialize logger: {e}");
    }
    tracing::info!(
        "Starting helpdesk ({})",
        if config.uses_demo_data() { "demo data" } else { "live backend" }
    );
    dioxus::launch(App);
}
