use campaign_connect::app::{self, AppState};
use campaign_connect::ContactStore;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let state = AppState::load();
    let store = ContactStore::seeded();
    match app::build_ui(&state, &store) {
        Ok(screens) => println!("{screens}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
