use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::Path;

use crate::config::config::validate_converter_name;
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::ports::facade_ports::ConversionAdapter;
use crate::models::conversion::{ConversionOutput, DEFAULT_CONVERTER};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<ConversionOutput> {
    println!("=== 歡迎使用互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let input = get_input_path()?;
    let output = get_output_path()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：{}，僅轉換支援的副檔名", DEFAULT_CONVERTER);
        Box::new(DefaultConfigAdapter::new(input, output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config = ConfigService::new(config_port).get_config()?;
    setup_logging(&get_log_level_option()?)?;

    let output = ConversionAdapter.execute(config.clone())?;
    println!("實際使用的配置：{:#?}", config);
    Ok(output)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（soffice、僅轉換支援的副檔名，僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入檔案或目錄路徑（例如：./report.docx 或 ./docs）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).exists() { Ok(()) } else { Err(format!("路徑 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出目錄（例如：./output，預設為 output）")
        .default("output".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_converter() -> io::Result<String> {
    let converter: String = Input::new()
        .with_prompt("輸入轉換程式名稱或路徑")
        .default(DEFAULT_CONVERTER.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    validate_converter_name(&converter)?;
    Ok(converter)
}

pub fn get_allow_unlisted_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否略過副檔名檢查，轉換所有檔案？（預設為否）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("副檔名選項選擇失敗: {}", e)))
}

pub fn get_no_progress_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否隱藏進度條？（預設為否）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("進度條選項選擇失敗: {}", e)))
}

pub fn get_log_level_option() -> io::Result<String> {
    let levels = ["info", "warn", "error", "debug"];
    let index = Select::new()
        .with_prompt("選擇日誌等級（使用方向鍵選擇，按 Enter 確認）")
        .items(&levels)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌等級選擇失敗: {}", e)))?;
    Ok(levels[index].to_string())
}

// 互動配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let converter = get_converter()?;
        let allow_unlisted_extension = get_allow_unlisted_option()?;
        let no_progress = get_no_progress_option()?;

        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            converter: Some(converter),
            allow_unlisted_extension,
            scratch_dir: None,
            no_progress,
        })
    }
}
