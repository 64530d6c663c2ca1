use std::env;

use log::error;
use tokio::signal;

use hallbook_events::feed::Feed;
use hallbook_events::view::{render, EventsView};

mod cli;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "hallbook_events=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() {
    let args = cli::parse(env::args().skip(1).collect());
    setup_logging();

    let feed = Feed::new(args.server_url);
    let mut view = EventsView::new();

    println!("Upcoming Events");
    println!("{}", render(&view));

    // The fetch is bound to the view's lifetime: interrupting the process
    // drops the future instead of letting it finish against a dead view.
    tokio::select! {
        result = view.load(&feed) => {
            if let Err(err) = result {
                error!("{err}");
            }
        }
        _ = signal::ctrl_c() => return,
    }

    println!("{}", render(&view));
}
