use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{Cli, validate_converter_name, validate_input_path};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::ports::facade_ports::ConversionAdapter;
use crate::models::conversion::{ConversionOutput, DEFAULT_CONVERTER};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::file::is_writable_dir;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref().unwrap_or("info"))?;

    // 檢查是否僅提供 input 和 output（預設配置）
    let is_default_config = cli.converter.is_none()
        && cli.allow_unlisted_extension.is_none()
        && cli.scratch_dir.is_none()
        && cli.no_progress.is_none();

    // 選擇配置適配器
    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：{}，僅轉換支援的副檔名", DEFAULT_CONVERTER);
        Box::new(DefaultConfigAdapter::new(cli.input.clone(), cli.output.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let output = conversion_port.execute(config.clone())?;

    // 若啟用 --show-config，在轉換後顯示配置
    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_input_path(&self.cli.input)?;

        if let Some(converter) = &self.cli.converter {
            validate_converter_name(converter)?;
        }

        if let Some(scratch_dir) = &self.cli.scratch_dir {
            if !is_writable_dir(std::path::Path::new(scratch_dir)) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("暫存目錄 '{}' 不存在或不可寫入", scratch_dir)
                ));
            }
        }

        if self.cli.converter.is_some() || self.cli.allow_unlisted_extension == Some(true) {
            log::warn!("使用自訂配置，實際使用的參數：converter={:?}, allow_unlisted_extension={:?}, scratch_dir={:?}, no_progress={:?}",
                self.cli.converter, self.cli.allow_unlisted_extension, self.cli.scratch_dir, self.cli.no_progress);
        }

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            converter: self.cli.converter.clone(),
            allow_unlisted_extension: self.cli.allow_unlisted_extension.unwrap_or(false),
            scratch_dir: self.cli.scratch_dir.clone(),
            no_progress: self.cli.no_progress.unwrap_or(false),
        })
    }
}
