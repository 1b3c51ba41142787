//! Catalog service: author, book, genre and language management

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorDetails, CreateAuthor, UpdateAuthor},
        book::{Book, BookShort, CreateBook, UpdateBook},
        book_instance::{BookInstance, CreateBookInstance},
        genre::Genre,
        language::Language,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // -----------------------------------------------------------------------
    // Books
    // -----------------------------------------------------------------------

    pub async fn list_books(&self, page: i64, per_page: i64) -> AppResult<(Vec<BookShort>, i64)> {
        self.repository.books.list(page, per_page).await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book. The ISBN must be 13 characters and unique.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.books.isbn_exists(&book.isbn, None).await? {
            return Err(AppError::Conflict(
                "Book with this ISBN already exists".to_string(),
            ));
        }

        self.repository.books.create(&book).await
    }

    /// Replace an existing book
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.get_by_id(id).await?;

        if self
            .repository
            .books
            .isbn_exists(&book.isbn, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "Book with this ISBN already exists".to_string(),
            ));
        }

        self.repository.books.update(id, &book).await
    }

    /// Delete a book. Fails with a conflict while copies exist.
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    /// Copies of a book
    pub async fn get_book_instances(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository.instances.list_for_book(book_id).await
    }

    /// Add a copy of a book
    pub async fn create_book_instance(
        &self,
        book_id: i32,
        instance: CreateBookInstance,
    ) -> AppResult<BookInstance> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository.instances.create(book_id, &instance).await
    }

    /// Delete a copy. Fails with a conflict while it is on loan.
    pub async fn delete_book_instance(&self, id: uuid::Uuid) -> AppResult<()> {
        self.repository.instances.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Authors
    // -----------------------------------------------------------------------

    pub async fn list_authors(&self, page: i64, per_page: i64) -> AppResult<(Vec<Author>, i64)> {
        self.repository.authors.list(page, per_page).await
    }

    /// Author with the books they wrote
    pub async fn get_author(&self, id: i32) -> AppResult<AuthorDetails> {
        let author = self.repository.authors.get_by_id(id).await?;
        let books = self.repository.authors.get_books(id).await?;
        Ok(AuthorDetails::from_author(author, books))
    }

    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        self.repository.authors.create(&author).await
    }

    pub async fn update_author(&self, id: i32, author: UpdateAuthor) -> AppResult<Author> {
        self.repository.authors.update(id, &author).await
    }

    /// Delete an author. Fails with a conflict while referencing books exist.
    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // -----------------------------------------------------------------------
    // Lookup tables
    // -----------------------------------------------------------------------

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        self.repository.languages.list().await
    }
}
