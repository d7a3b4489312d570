use std::process::ExitCode;

use biomass_furnace_toolbox::{app, ui_cli::Cli};
use clap::Parser;

/// 프로그램의 엔트리 포인트. 명령행을 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
