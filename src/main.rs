mod application;
mod blend;
mod bmp;
mod error;
mod ratio;

use std::process;
use std::str::FromStr;

use clap::App;
use clap::AppSettings;
use clap::Arg;

use bmp::RowLayout;
use ratio::Ratio;


const VERSION: &'static str = env!("CARGO_PKG_VERSION");
const AUTHORS: &'static str = env!("CARGO_PKG_AUTHORS");

const EXIT_USAGE: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app =
        App::new("bmp blend")
        .version(VERSION)
        .author(AUTHORS)
        .about("blend two 24-bit bitmaps of the same size")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("input_a")
            .help("first bitmap, its header is reused for the output")
            .required(true)
            .index(1)
        )
        .arg(
            Arg::with_name("ratio")
            .help("weight of the first bitmap, from \"0%\" to \"100%\"")
            .required(true)
            .index(2)
        )
        .arg(
            Arg::with_name("input_b")
            .help("second bitmap")
            .required(true)
            .index(3)
        )
        .arg(
            Arg::with_name("output")
            .help("result bitmap")
            .required(true)
            .index(4)
        )
        .arg(
            Arg::with_name("packed_rows")
            .long("packed-rows")
            .help("read rows without padding and write one padding byte per row, like older outputs")
            .takes_value(false)
        )
        .arg(
            Arg::with_name("preview")
            .long("preview")
            .help("also save the result as a png")
            .takes_value(true)
        );

    let args = app.get_matches();

    let options = {
        let mut options = application::AppOptions::default();
        options.set_inputs(args.value_of("input_a").unwrap_or_default(), args.value_of("input_b").unwrap_or_default());
        options.set_output(args.value_of("output").unwrap_or_default());
        match Ratio::from_str(args.value_of("ratio").unwrap_or_default()) {
            Ok(ratio) => options.set_ratio(ratio),
            Err(e) => {
                log::error!("{}", e);
                process::exit(EXIT_USAGE);
            }
        }
        if args.is_present("packed_rows") {
            options.set_layout(RowLayout::Packed);
        }
        options.set_preview(args.value_of("preview"));
        options
    };

    let app = application::Application::new(options);
    if let Err(e) = app.run() {
        log::error!("{}", e);
        process::exit(if e.is_fatal() { EXIT_FATAL } else { EXIT_USAGE });
    }
}
