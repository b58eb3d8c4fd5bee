use std::process::ExitCode;

use doc_to_pdf::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，輸出目錄：{}", output.output_dir.display());
            println!("轉換完成！成功 {} 個，失敗 {} 個，輸出檔案位於：{}",
                output.converted, output.failed, output.output_dir.display());
            if output.failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
        }
        Err(e) => {
            eprintln!("錯誤：{}", e);
            ExitCode::FAILURE
        }
    }
}
