use std::io;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器
pub struct DefaultConfigAdapter {
    input: String,
    output: String,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: String) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            converter: None,
            allow_unlisted_extension: false,
            scratch_dir: None,
            no_progress: false,
        })
    }
}
