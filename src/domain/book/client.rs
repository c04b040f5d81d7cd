//! Books sub-client — catalogue queries.

use tracing::info;

use crate::client::BooksClient;
use crate::domain::book::Book;
use crate::error::SdkError;

pub struct Books<'a> {
    pub(crate) client: &'a BooksClient,
}

impl<'a> Books<'a> {
    /// List the catalogue. Unauthenticated.
    pub async fn list(&self) -> Result<Vec<Book>, SdkError> {
        let books: Vec<Book> = self.client.http.get("/books", None).await?;
        info!(count = books.len(), "Listed books");
        Ok(books)
    }
}
