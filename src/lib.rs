use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::io::{self, Write};
use std::iter;
use clap::Parser;

type MyResult<T> = Result<T, Box<dyn Error>>;

/// Rust upper: print the arguments joined by spaces, in uppercase
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Input text
    #[arg(name = "TEXT")]
    text: Vec<OsString>,
}

pub fn get_args() -> MyResult<Config> {
    Ok(parse_config(env::args_os()))
}

// Every user token lands after our own "--", so clap never sees an option
// and a user "--" is kept as text.
fn parse_config<I, T>(args: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("upperr"));
    Config::parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(args))
}

pub fn shout(words: &[String]) -> String {
    words.join(" ").to_uppercase()
}

pub fn run(config: Config) -> MyResult<()> {
    let words: Vec<String> = config
        .text
        .iter()
        .map(|word| word.to_string_lossy().into_owned())
        .collect();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", shout(&words))?;
    // Surfaces a closed stdout as an error instead of losing it on drop.
    out.flush()?;
    Ok(())
}
