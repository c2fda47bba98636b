mod args;
mod commands;
mod error;
mod log;

use args::parse_args;

fn main() {
    let (args, cmd) = parse_args();
    log::init_logger(&args.log_level);

    match commands::run(&cmd, &args) {
        Ok(lines) => {
            for line in lines.iter() {
                println!("{}", line.as_str());
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
