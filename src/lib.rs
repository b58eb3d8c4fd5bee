pub mod error;

pub mod service {
    pub mod config_service;
    pub mod converter;
    pub mod file;

    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_facade;

    pub mod ports {
        pub mod facade_ports;
    }

    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod file;
    pub mod process;
}

pub mod utils {
    pub mod file;
    pub mod utils;
}

pub use error::{ConvertError, Result};
pub use models::conversion::{ConversionRequest, ConversionRequestBuilder, ConversionResult, ConverterConfig};
pub use service::converter::{ConverterService, SystemRunner};
