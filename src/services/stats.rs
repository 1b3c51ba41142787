//! Statistics service: catalog counts for the landing page

use crate::{
    api::stats::StatsResponse, error::AppResult, models::book_instance::LoanStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Counts of the main catalog objects
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let num_books = self.repository.books.count().await?;
        let num_instances = self.repository.instances.count().await?;
        let num_instances_available = self
            .repository
            .instances
            .count_by_status(LoanStatus::Available)
            .await?;
        let num_authors = self.repository.authors.count().await?;

        Ok(StatsResponse {
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
        })
    }
}
