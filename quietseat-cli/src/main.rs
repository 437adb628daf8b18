//! Entry point for the `quietseat` binary.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = quietseat_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on standard error"
)]
fn report(err: &quietseat_cli::CliError) {
    eprintln!("quietseat: {err}");
}
