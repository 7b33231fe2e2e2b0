mod app;

use std::{env, process, thread, time::Duration};

use log::error;

use tuio_client::ListenerConfig;

use app::App;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ListenerConfig::default();
    if let Some(port) = env::args().nth(1) {
        match port.parse() {
            Ok(port) => config.local_port = port,
            Err(_) => {
                error!("'{}' is not a valid port", port);
                process::exit(2);
            }
        }
    }

    let app = App::new(config);
    if let Err(error) = app.start() {
        error!("{}", error);
        process::exit(1);
    }

    loop {
        thread::sleep(Duration::from_secs(5));
        app.report();
    }
}
