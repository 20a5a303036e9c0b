use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(err) = code_digest::app::run() {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
