use std::process::Command;
use std::str::from_utf8;

const GIT_COMMAND: &str = "git";
const GIT_ARGS: [&str; 3] = ["show", "--no-patch", "--format=%h %as"];

const UNKNOWN_HASH: &str = "unknown";
const UNKNOWN_DATE: &str = "unknown";

fn main() {
    let (hash, date) = match Command::new(GIT_COMMAND).args(GIT_ARGS).output() {
        Ok(out) if out.status.success() => from_utf8(&out.stdout)
            .ok()
            .and_then(|s| s.trim().split_once(' '))
            .map(|(hash, date)| (hash.to_string(), date.to_string()))
            .unwrap_or_else(unknown),
        Ok(out) => {
            eprintln!("[{GIT_COMMAND}]: {}", out.status);
            unknown()
        }
        Err(e) => {
            eprintln!("[{GIT_COMMAND}]: {e}");
            unknown()
        }
    };

    println!("cargo:rustc-env=BUILD_HASH={hash}");
    println!("cargo:rustc-env=BUILD_DATE={date}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn unknown() -> (String, String) {
    (UNKNOWN_HASH.to_string(), UNKNOWN_DATE.to_string())
}
