//! Metadata returned by write operations.

/// The outcome of one successful upsert or patch.
///
/// Carries the written item together with the store-reported entity tag and
/// request charge, when the client surfaces them.
#[derive(Debug, Clone)]
pub struct WriteResult<T> {
    item: T,
    etag: Option<String>,
    request_charge: f64,
}

impl<T> WriteResult<T> {
    /// Wraps a written item with no store metadata.
    pub fn new(item: T) -> Self {
        Self {
            item,
            etag: None,
            request_charge: 0.0,
        }
    }

    /// Sets the store-reported entity tag.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    /// Sets the store-reported request charge.
    pub fn with_request_charge(mut self, charge: f64) -> Self {
        self.request_charge = charge;
        self
    }

    /// The written item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the result, returning the written item.
    pub fn into_item(self) -> T {
        self.item
    }

    /// The entity tag assigned by the store, if any.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// The request charge reported by the store.
    pub fn request_charge(&self) -> f64 {
        self.request_charge
    }
}
