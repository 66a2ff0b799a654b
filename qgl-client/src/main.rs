use std::process::ExitCode;

fn main() -> ExitCode {
    qgl_client::launch_selector(std::env::args().nth(1))
}
