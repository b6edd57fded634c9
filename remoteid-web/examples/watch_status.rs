//! Watch a device's status endpoint and print the resolved page
//!
//! Usage:
//!   cargo run --example watch_status -- [status_url] [polls]
//!
//! Example:
//!   cargo run --example watch_status -- http://192.168.4.1/ajax/status.json 5

use remoteid_web::fill::BOARD_ID_KEY;
use remoteid_web::{
    ajax_json_poll, CancellationToken, Document, HttpTransport, PageController, PollConfig,
    ThreadTimer, DEFAULT_STATUS_URL,
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).map(String::as_str).unwrap_or(DEFAULT_STATUS_URL);
    let polls: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 5,
    };

    let transport = HttpTransport::new()?;
    let mut controller = PageController::new(Document::with_elements(["STATUS:BOARD"]));

    let stats = ajax_json_poll(
        &transport,
        url,
        |json| {
            // Every key except the board code becomes an element
            if let Some(object) = json.as_object() {
                for key in object.keys().filter(|key| key.as_str() != BOARD_ID_KEY) {
                    controller.page_mut().add_element(key.as_str());
                }
            }
            controller.fill_json_html(json);
            true
        },
        &PollConfig::new().with_max_polls(polls),
        &mut ThreadTimer,
        &CancellationToken::new(),
    )?;

    println!("\n=== {} ({} loads, {} requests) ===", url, stats.loads, stats.requests);
    for (id, element) in controller.page().elements() {
        println!("{:<30} {}", id, element.inner_html);
    }
    if let Some(color) = controller.page().background() {
        println!("background: {}", color);
    }

    Ok(())
}
