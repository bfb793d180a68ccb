#[cfg(feature = "yew")]
fn main() {
    use octofit_tracker::config::Config;

    let config = Config::new();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("Starting OctoFit Tracker against {}", config.api_base_url);

    yew::Renderer::<octofit_tracker::app::App>::new().render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
