//! Documents Module
//!
//! Lists every document of a collection in a document store.

/// A collection that can be queried for all of its documents.
pub trait DocumentCollection {
    /// Document type yielded by queries
    type Document;
    /// Error raised by the query
    type Error;
    /// Lazy cursor over query results
    type Cursor: Iterator<Item = Self::Document>;

    /// Runs an unfiltered query, returning `None` when it yields nothing.
    fn find(&self) -> Result<Option<Self::Cursor>, Self::Error>;
}

/// Returns every document in `collection`, or an empty list if there are none.
pub fn list_all<C: DocumentCollection>(collection: &C) -> Result<Vec<C::Document>, C::Error> {
    Ok(collection
        .find()?
        .map(|cursor| cursor.collect())
        .unwrap_or_default())
}
