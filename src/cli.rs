use std::env;
use std::process;

use getopts::Options;

const SERVER_URL_VAR: &str = "HALLBOOK_SERVER_URL";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

pub struct Args {
    pub server_url: String,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "s",
        "server",
        concat!(
            "Base URL of the booking backend ",
            "[Default: $HALLBOOK_SERVER_URL, then http://127.0.0.1:5000]"
        ),
        "URL",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let server_url = matches
        .opt_str("server")
        .or_else(|| env::var(SERVER_URL_VAR).ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    Args {
        server_url: server_url.trim_end_matches('/').to_string(),
    }
}
