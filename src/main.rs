use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use boxdrop::config::BoxDropConfig;
use boxdrop::utils::logger::Logger;
use boxdrop::commands::{CommandFactory, BoxDropCommandFactory};

fn main() {
    let matches = ClapCommand::new("BoxDrop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Place a fixed-size ROI on an image annotation and export it")
        .arg(
            Arg::new("input")
                .help("Input image")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("annotation")
                .short('a')
                .long("annotation")
                .help("Bounding box of the drawn annotation in pixels (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .required(false),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("ROI width and height in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("description")
                .short('d')
                .long("description")
                .help("ROI description, stored after 'Cellularity: '")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export the pixels under the ROI")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Export destination (tif, png, bmp, gif or jpg)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("session")
                .long("session")
                .help("Session file holding the image's annotations")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file (TOML)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List the stored annotations instead of placing a ROI")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not draw progress output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Write debug logs to the configured log file")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match BoxDropConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration {}: {}", path, e);
                process::exit(1);
            }
        },
        None => BoxDropConfig::default(),
    };

    if matches.get_flag("verbose") {
        if let Err(e) = Logger::init_global_logger(&config.log_file, LevelFilter::Debug) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        let level = config.log_level.to_string().to_lowercase();
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    let audit = match Logger::append(&config.audit_log) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error opening audit log: {}", e);
            process::exit(1);
        }
    };

    let factory = BoxDropCommandFactory::new(config);

    let command_result = factory.create_command(&matches, &audit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
