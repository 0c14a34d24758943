use dotenvy::dotenv;

use employee_directory::models::config::DirectoryConfig;

fn main() {
    dotenv().ok(); // Load .env variables if present.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match DirectoryConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = employee_directory::run(config) {
        log::error!("Directory console failed: {err}");
        std::process::exit(1);
    }
}
