use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cecbridge")]
#[command(about = "Bridges HDMI-CEC commands to a polling consumer", long_about = None)]
struct Args {
    #[arg(long)]
    #[arg(help = "dump the configuration to file and exit")]
    #[arg(value_name = "OUT_FILE")]
    dump_configuration: Option<String>,

    #[arg(short)]
    #[arg(long)]
    #[arg(help = "path to the configuration file")]
    #[arg(value_name = "FILE")]
    configuration: Option<String>,
}

fn get_configuration(path: &Option<String>) -> cecbridge::configuration::BridgeConfiguration {
    match path {
        Some(path) => {
            let configuration = std::fs::read(path).expect("Configuration file not found");
            let configuration =
                String::from_utf8(configuration).expect("Could not decode the configuration file");
            serde_json::from_str(configuration.as_str()).expect("Invalid configuration file")
        }
        None => serde_json::from_str("{}").unwrap(),
    }
}

fn dump_configuration(path: &str, configuration: cecbridge::configuration::BridgeConfiguration) {
    println!("Dumping configuration to {}", path);
    std::fs::write(
        path,
        serde_json::to_string_pretty(&configuration).expect("Failed to serialize configuration"),
    )
    .expect("Failed to write configuration");
}

fn setup_logging(configuration: &cecbridge::configuration::LoggingConfiguration) {
    let level = if configuration.enabled {
        configuration.level
    } else {
        log::LevelFilter::Off
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .init();
    log::info!("Logger initialized with level {:?}", level);
}

fn main() {
    let args = Args::parse();

    let configuration = get_configuration(&args.configuration);

    setup_logging(&configuration.logging);

    if let &Some(path) = &args.dump_configuration.as_deref() {
        dump_configuration(path, configuration);
        return;
    }

    if let Err(e) = cecbridge::run_bridge(&configuration, None) {
        log::error!("Failed to start the CEC bridge: {:?}", e);
        std::process::exit(1);
    }
}
