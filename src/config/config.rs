use clap::Parser;
use std::io;
use std::path::Path;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "doc_to_pdf",
    about = "以外部轉換程式（預設 soffice）將文件轉換為 PDF",
    long_about = "呼叫無介面的 office 轉換程式，將單一文件或整個目錄中的文件轉換為 PDF。\n僅指定 input 與 --output 時使用預設配置（soffice、僅轉換支援的副檔名）。使用 --show-config 預覽實際配置。\n不帶任何參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要轉換的檔案或目錄
    pub input: String,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    /// 轉換程式名稱或路徑
    #[arg(long)]
    pub converter: Option<String>,
    /// 略過副檔名檢查
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub allow_unlisted_extension: Option<bool>,
    /// 作為轉換程式 HOME 的目錄，預設每次使用新的暫存目錄
    #[arg(long)]
    pub scratch_dir: Option<String>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub no_progress: Option<bool>,
    #[arg(long, value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    Ok(path)
}

pub fn validate_converter_name(converter: &str) -> io::Result<()> {
    if converter.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "轉換程式名稱不可為空"));
    }
    Ok(())
}
