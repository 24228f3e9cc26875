use log::info;
use screenshot_saver::component::SelfTest;
use screenshot_saver::config::Config;
use screenshot_saver::init;

fn main() {
    init::init();

    let config = Config::new();
    info!("Output directory: {}", config.settings.output_dir.display());

    SelfTest::new(config).run();
}
