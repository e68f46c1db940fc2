//! mkpasswd CLI - generate a six-word passphrase from the OS random device.
//!
//! Output contract: on success, exactly one line on stdout holding the six
//! words joined per the chosen delimiter, followed by a single newline.
//! Usage and diagnostics go to stderr only. Exit status is 0 on success and
//! on `-h`; a randomness failure exits with the underlying OS error code
//! when one is available.

use std::process::ExitCode;

use clap::Parser;

use mkpasswd_core::{Delimiter, DeviceSource, MkpasswdError, Passphrase};

// The automatic clap help/version surfaces are disabled: `-h` must print
// usage on stderr (not stdout) and generate nothing, and the only flags
// are the three documented ones.
#[derive(Parser)]
#[command(about = "mkpasswd - a passphrase generator")]
#[command(name = "mkpasswd")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Delimit words with dashes
    #[arg(short = 'd', overrides_with_all = ["dashes", "spaces"])]
    dashes: bool,

    /// Delimit words with spaces
    #[arg(short = 's', overrides_with_all = ["dashes", "spaces"])]
    spaces: bool,

    /// Print usage to stderr and exit
    #[arg(short = 'h')]
    usage: bool,
}

impl Cli {
    /// Delimiter mode selected by the flags; when both `-d` and `-s` were
    /// given, the last one parsed wins (the earlier flag is overridden).
    fn delimiter(&self) -> Delimiter {
        if self.dashes {
            Delimiter::Dash
        } else if self.spaces {
            Delimiter::Space
        } else {
            Delimiter::None
        }
    }
}

fn print_usage() {
    eprintln!("usage: mkpasswd [-dsh]");
    eprintln!("  -h : print this message");
    eprintln!("  -d : delimit words with dashes");
    eprintln!("  -s : delimit words with spaces");
    eprintln!("  (default) : no delimiters");
    eprintln!("If both -d and -s are given, the last one wins.");
}

/// Exit status for a randomness failure: the OS error code when it fits,
/// else a generic failure.
fn exit_code_for(err: &MkpasswdError) -> u8 {
    err.os_error_code()
        .and_then(|code| u8::try_from(code).ok())
        .filter(|&code| code != 0)
        .unwrap_or(1)
}

fn run(delimiter: Delimiter) -> mkpasswd_core::Result<()> {
    let mut source = DeviceSource::open()?;
    let phrase = Passphrase::generate(&mut source)?;
    println!("{}", phrase.render(delimiter));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.usage {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(cli.delimiter()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mkpasswd: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
