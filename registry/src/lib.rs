use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        book::BookRepositoryImpl, book_instance::BookInstanceRepositoryImpl,
        genre::GenreRepositoryImpl, health::HealthCheckRepositoryImpl,
    },
};
use kernel::repository::{
    book::BookRepository, book_instance::BookInstanceRepository, genre::GenreRepository,
    health::HealthCheckRepository,
};

#[derive(Clone)]
pub struct AppRegistryImpl {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    genre_repository: Arc<dyn GenreRepository>,
    book_repository: Arc<dyn BookRepository>,
    book_instance_repository: Arc<dyn BookInstanceRepository>,
}

impl AppRegistryImpl {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let genre_repository = Arc::new(GenreRepositoryImpl::new(pool.clone()));
        let book_repository = Arc::new(BookRepositoryImpl::new(pool.clone()));
        let book_instance_repository = Arc::new(BookInstanceRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            genre_repository,
            book_repository,
            book_instance_repository,
        }
    }
}

#[mockall::automock]
pub trait AppRegistryExt {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository>;
    fn genre_repository(&self) -> Arc<dyn GenreRepository>;
    fn book_repository(&self) -> Arc<dyn BookRepository>;
    fn book_instance_repository(&self) -> Arc<dyn BookInstanceRepository>;
}

impl AppRegistryExt for AppRegistryImpl {
    fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    fn genre_repository(&self) -> Arc<dyn GenreRepository> {
        self.genre_repository.clone()
    }

    fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    fn book_instance_repository(&self) -> Arc<dyn BookInstanceRepository> {
        self.book_instance_repository.clone()
    }
}

pub type AppRegistry = Arc<dyn AppRegistryExt + Send + Sync + 'static>;
