//! The process-wide default repository.

use lazy_static::lazy_static;

use crate::config::RepositoryConfig;
use crate::repository::Repository;

lazy_static! {
    static ref DEFAULT_REPOSITORY: Repository = {
        let config = RepositoryConfig::from_env();
        log::debug!("default repository search path: {:?}", config.search_path);
        Repository::with_config(config)
    };
}

impl Repository {
    /// The process-wide repository, created on first use with
    /// [`RepositoryConfig::from_env`] and never destroyed.
    pub fn global() -> &'static Repository {
        &DEFAULT_REPOSITORY
    }
}
