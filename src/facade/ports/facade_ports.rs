use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput, ConverterConfig};
use crate::service::converter::{ConverterService, SystemRunner};
use crate::service::file::FileService;

// 將 AppConfig 接到轉換 Facade 的適配器
pub struct ConversionAdapter;

impl ConversionAdapter {
    pub fn to_input(config: &AppConfig) -> ConversionInput {
        ConversionInput {
            input_path: PathBuf::from(&config.input),
            output_dir: PathBuf::from(&config.output),
            config: ConverterConfig {
                converter: config.converter.clone(),
                allow_unlisted_extension: config.allow_unlisted_extension,
                scratch_dir: config.scratch_dir.as_ref().map(PathBuf::from),
            },
            no_progress: config.no_progress,
        }
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let input = Self::to_input(&config);
        let converter_service = ConverterService::with_runner(Box::new(SystemRunner), input.config.scratch_dir.clone());
        let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(converter_service),
        ));
        Ok(facade.execute_conversion(input)?)
    }
}
