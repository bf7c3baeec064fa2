//! Loader factories. One per format tag; chosen once at startup.

use crate::adapters::loaders::{JsonDataLoader, XmlDataLoader};
use crate::domain::DataFormat;
use crate::ports::{DataLoader, LoaderFactory};
use tracing::debug;

/// Creates [`JsonDataLoader`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoaderFactory;

impl LoaderFactory for JsonLoaderFactory {
    fn create_loader(&self) -> Box<dyn DataLoader> {
        Box::new(JsonDataLoader::new())
    }
}

/// Creates [`XmlDataLoader`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlLoaderFactory;

impl LoaderFactory for XmlLoaderFactory {
    fn create_loader(&self) -> Box<dyn DataLoader> {
        Box::new(XmlDataLoader::new())
    }
}

/// Factory matching `format`. Callers never branch on the format after this.
pub fn factory_for(format: DataFormat) -> Box<dyn LoaderFactory> {
    debug!(%format, "selecting loader factory");
    match format {
        DataFormat::Json => Box::new(JsonLoaderFactory),
        DataFormat::Xml => Box::new(XmlLoaderFactory),
    }
}

pub fn create_loader(format: DataFormat) -> Box<dyn DataLoader> {
    factory_for(format).create_loader()
}
