use clap::Parser;
use modlint::args::Args;
use modlint::run;
use modlint::status::ExitStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();

            // This isn't a lint failure: modlint itself hard-errored, e.g. on
            // an invalid `modlint.toml` or an unreadable file.
            writeln!(stderr, "modlint failed").ok();

            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}
