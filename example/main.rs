use std::io::BufRead;
use std::process::ExitCode;
use uriref::{Uri, UriParser};

/// Print the components of each URI reference given as argument, or read one per line from
/// stdin when there is none.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut parser = UriParser::new();
    let mut failed = false;

    let mut inspect = |input: &str| match parser.parse_from_string(input) {
        Ok(()) => print(input, parser.uri()),
        Err(err) => {
            log::error!("{input:?}: {err}");
            failed = true;
        }
    };

    if args.is_empty() {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => inspect(line.trim_end()),
                Err(err) => {
                    log::error!("failed to read stdin: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for arg in &args {
            inspect(arg);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print(input: &str, uri: &Uri) {
    println!("{input}");
    println!("  scheme:    {:?}", uri.scheme());
    println!("  userinfo:  {:?}", uri.userinfo().map(String::from_utf8_lossy));
    println!("  host:      {:?}", uri.host());
    println!("  port:      {:?}", uri.port());
    println!("  path:      {:?}", uri.path());
    println!("  query:     {:?}", uri.query());
    println!("  fragment:  {:?}", uri.fragment());
    println!("  relative reference: {}", uri.is_relative_reference());
    println!("  relative path:      {}", uri.contains_relative_path());
}
