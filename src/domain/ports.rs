use crate::domain::model::{Catalog, MatchResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn products_path(&self) -> &str;
    fn listings_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn monitoring_enabled(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Catalog>;
    fn transform<'a>(&self, catalog: &'a Catalog) -> Result<Vec<MatchResult<'a>>>;
    fn load(&self, results: &[MatchResult<'_>]) -> Result<String>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}
