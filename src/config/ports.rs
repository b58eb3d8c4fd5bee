use std::io;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub converter: Option<String>,
    pub allow_unlisted_extension: bool,
    pub scratch_dir: Option<String>,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
