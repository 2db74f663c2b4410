fn main() {
    setup_assets::logging::init_logging();
    setup_assets::app::cli::run();
}
