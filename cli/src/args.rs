use clap::{Arg, ArgMatches, Command, arg, error::ErrorKind, parser::ValueSource::DefaultValue, value_parser};
use olympus_bip32::{DerivationPath, Network};
use serde::Deserialize;
use std::{ffi::OsString, fs};
use toml::from_str;

pub const DEFAULT_SEED_LENGTH: usize = 32;
pub const DEFAULT_ADDRESS_COUNT: u32 = 20;

/// Settings shared by every subcommand. A config file supplies defaults,
/// explicit command line values override it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Args {
    pub network: Network,
    #[serde(rename = "loglevel")]
    pub log_level: String,
    pub count: u32,
    /// Worker threads for parallel derivation, 0 means one per core.
    pub threads: usize,
}

impl Default for Args {
    fn default() -> Self {
        Self { network: Network::Mainnet, log_level: "info".into(), count: DEFAULT_ADDRESS_COUNT, threads: 0 }
    }
}

impl Args {
    pub fn worker_threads(&self) -> usize {
        if self.threads == 0 { num_cpus::get() } else { self.threads }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Seed { length: usize },
    Master { seed: String },
    Derive { key: String, path: DerivationPath },
    Inspect { key: String },
    Addresses { key: String, start: u32, count: u32 },
    Wif { key: String },
}

fn key_arg() -> Arg {
    Arg::new("key").short('k').long("key").value_name("EXTENDED_KEY").required(true).help("Serialized extended key (xprv/xpub/tprv/tpub).")
}

pub fn cli() -> Command {
    Command::new("olympus-hd")
        .about(format!("{} (olympus-hd) v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION")))
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(-C --configfile <CONFIG_FILE> "Path of config file.").global(true))
        .arg(
            Arg::new("network")
                .short('n')
                .long("network")
                .value_name("NETWORK")
                .global(true)
                .value_parser(value_parser!(Network))
                .help("Network whose prefixes new keys are encoded with (mainnet, testnet)."),
        )
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .value_name("LEVEL")
                .default_value("info")
                .global(true)
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems."),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("THREADS")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Worker threads used for parallel derivation (default: one per core)."),
        )
        .subcommand(
            Command::new("seed").about("Print a random hex encoded seed.").arg(
                Arg::new("length")
                    .short('l')
                    .long("length")
                    .value_name("BYTES")
                    .value_parser(value_parser!(usize))
                    .default_value("32")
                    .help("Seed length in bytes (16 to 64)."),
            ),
        )
        .subcommand(
            Command::new("master")
                .about("Print the master extended private and public keys of a seed.")
                .arg(Arg::new("seed").short('s').long("seed").value_name("HEX").required(true).help("Hex encoded seed bytes.")),
        )
        .subcommand(
            Command::new("derive").about("Derive the key at a path below the given key.").arg(key_arg()).arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .required(true)
                    .value_parser(value_parser!(DerivationPath))
                    .help("Derivation path such as m/0'/1/2'."),
            ),
        )
        .subcommand(Command::new("inspect").about("Print the attributes of an extended key.").arg(key_arg()))
        .subcommand(
            Command::new("addresses")
                .about("Print the addresses of consecutive non-hardened children.")
                .arg(key_arg())
                .arg(Arg::new("count").long("count").value_name("N").value_parser(value_parser!(u32)).help("Number of child indices to derive (default: 20)."))
                .arg(Arg::new("start").long("start").value_name("INDEX").value_parser(value_parser!(u32)).default_value("0").help("First child index.")),
        )
        .subcommand(Command::new("wif").about("Print the wallet import format of a private key.").arg(key_arg()))
}

impl Args {
    pub fn parse<I, T>(itr: I) -> Result<(Args, Cmd), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m: ArgMatches = cli().try_get_matches_from(itr)?;
        let mut defaults: Args = Default::default();

        if let Some(config_file) = m.get_one::<String>("configfile") {
            let config_str = fs::read_to_string(config_file)?;
            defaults = from_str(&config_str).map_err(|toml_error| {
                clap::Error::raw(ErrorKind::ValueValidation, format!("failed parsing config file, reason: {}", toml_error.message()))
            })?;
        }

        let mut args = Args {
            network: arg_match_unwrap_or::<Network>(&m, "network", defaults.network),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
            count: defaults.count,
            threads: arg_match_unwrap_or::<usize>(&m, "threads", defaults.threads),
        };

        let cmd = match m.subcommand() {
            Some(("seed", sub_m)) => Cmd::Seed { length: arg_match_unwrap_or::<usize>(sub_m, "length", DEFAULT_SEED_LENGTH) },
            Some(("master", sub_m)) => Cmd::Master { seed: required::<String>(sub_m, "seed")? },
            Some(("derive", sub_m)) => {
                Cmd::Derive { key: required::<String>(sub_m, "key")?, path: required::<DerivationPath>(sub_m, "path")? }
            }
            Some(("inspect", sub_m)) => Cmd::Inspect { key: required::<String>(sub_m, "key")? },
            Some(("addresses", sub_m)) => {
                args.count = arg_match_unwrap_or::<u32>(sub_m, "count", args.count);
                Cmd::Addresses { key: required::<String>(sub_m, "key")?, start: arg_match_unwrap_or::<u32>(sub_m, "start", 0), count: args.count }
            }
            Some(("wif", sub_m)) => Cmd::Wif { key: required::<String>(sub_m, "key")? },
            _ => return Err(clap::Error::raw(ErrorKind::MissingSubcommand, "a subcommand is required\n")),
        };

        Ok((args, cmd))
    }
}

fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &ArgMatches, arg_id: &str, default: T) -> T {
    m.get_one::<T>(arg_id).cloned().filter(|_| m.value_source(arg_id) != Some(DefaultValue)).unwrap_or(default)
}

fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, arg_id: &str) -> Result<T, clap::Error> {
    m.get_one::<T>(arg_id)
        .cloned()
        .ok_or_else(|| clap::Error::raw(ErrorKind::MissingRequiredArgument, format!("the argument '{arg_id}' is required\n")))
}

pub fn parse_args() -> (Args, Cmd) {
    match Args::parse(std::env::args_os()) {
        Ok(parsed) => parsed,
        // help and version requests exit successfully
        Err(err) => err.exit(),
    }
}
