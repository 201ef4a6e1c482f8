//! Shared helpers for integration tests

#![allow(dead_code)]

use pokeline::config::AppConfig;
use pokeline::dex::io::{MockEventStream, MockRenderStream};
use pokeline::dex::testing::FakePokeApi;
use pokeline::{AppController, DetailPayload, Reference};

pub type TestController = AppController<MockEventStream, MockRenderStream, FakePokeApi>;

/// Initialize tracing with the level from `POKELINE_LOG_LEVEL` (default error)
pub fn init_tracing() {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var("POKELINE_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized
}

pub fn detail_url(name: &str) -> String {
    format!("https://pokeapi.test/api/v2/pokemon/{name}/")
}

pub fn pokemon(name: &str) -> Reference {
    Reference::new(name, detail_url(name))
}

pub fn sprite(name: &str) -> String {
    format!("https://sprites.test/{name}.png")
}

/// Fake API serving `names` with a sprite for every entry
pub fn api_with(names: &[&str]) -> FakePokeApi {
    let api = FakePokeApi::with_collection(names.iter().map(|name| pokemon(name)).collect());
    for name in names {
        api.set_detail(&detail_url(name), DetailPayload::with_image(sprite(name)));
    }
    api
}

pub fn starters() -> FakePokeApi {
    api_with(&["bulbasaur", "charmander", "squirtle", "pikachu"])
}

/// Controller over mock streams plus handles to drive and observe them
pub fn controller_with(
    config: &AppConfig,
    api: FakePokeApi,
) -> (TestController, MockEventStream, MockRenderStream) {
    init_tracing();
    let events = MockEventStream::empty();
    let screen = MockRenderStream::with_size((100, 16));
    let controller =
        AppController::with_io_streams(config, api, events.clone(), screen.clone())
            .expect("controller should build over mock streams");
    (controller, events, screen)
}

/// Feed every queued event to the controller
pub fn drain_input(controller: &mut TestController) {
    while controller
        .handle_next_input(std::time::Duration::ZERO)
        .expect("input handling should succeed")
    {}
}
