use std::process::ExitCode;

fn main() -> ExitCode {
    match mass_curves::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gauss: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
