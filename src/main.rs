#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

fn main() {
    env_logger::init();

    if let Err(err) = traywarden::run() {
        log::error!("{:#}", err);
        traywarden::notify::report_fatal(&format!("{:#}", err));
        std::process::exit(1);
    }
}
