// --- File: crates/formarte_booking/src/store.rs ---
//! Booking store: an ordered in-memory list mirrored to one key-value entry.
//!
//! The entry holds a JSON array of every owner's bookings. Mutations write
//! the new array first and only then replace the in-memory list, so memory
//! never runs ahead of storage.

use chrono::NaiveDate;
use formarte_storage::SharedStore;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::lifecycle;
use crate::models::{Booking, BookingStatus, NewBooking};

/// Parses the stored entry. Anything that is not a JSON array loads as an
/// empty list; array elements that are not bookings are skipped.
pub fn decode_bookings(raw: &str) -> Vec<Booking> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("Stored bookings are not an array, starting with no bookings");
            return Vec::new();
        }
        Err(e) => {
            warn!("Could not parse stored bookings ({}), starting with no bookings", e);
            return Vec::new();
        }
    };

    let total = items.len();
    let bookings: Vec<Booking> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Booking>(item) {
            Ok(booking) => Some(booking),
            Err(e) => {
                warn!("Skipping malformed stored booking: {}", e);
                None
            }
        })
        .collect();
    if bookings.len() != total {
        warn!("Loaded {} of {} stored bookings", bookings.len(), total);
    }
    bookings
}

pub fn encode_bookings(bookings: &[Booking]) -> Result<String, serde_json::Error> {
    serde_json::to_string(bookings)
}

pub struct BookingStore {
    kv: SharedStore,
    key: String,
    bookings: Vec<Booking>,
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore")
            .field("key", &self.key)
            .field("bookings", &self.bookings.len())
            .finish()
    }
}

impl BookingStore {
    /// Restores the list from storage. Read failures are logged and yield an
    /// empty store; they are never fatal.
    pub async fn load(kv: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let bookings = read_entry(&kv, &key).await;
        info!("Loaded {} bookings from '{}'", bookings.len(), key);
        Self { kv, key, bookings }
    }

    /// Re-reads the entry, discarding the in-memory list.
    pub async fn reload(&mut self) {
        self.bookings = read_entry(&self.kv, &self.key).await;
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Bookings stamped with `owner`, in store order.
    pub fn for_owner(&self, owner: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_email == owner)
            .cloned()
            .collect()
    }

    /// Appends a paid booking, assigning its id and owner.
    pub async fn append(&mut self, draft: NewBooking, owner: &str) -> Result<Booking, BookingError> {
        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            user_email: owner.to_string(),
            kind: draft.kind,
            service_title: draft.service_title,
            date: draft.date,
            time: draft.time,
            tutor_name: draft.tutor_name,
            status: BookingStatus::Upcoming,
            price: draft.price,
        };

        let mut next = self.bookings.clone();
        next.push(booking.clone());
        self.persist(&next).await?;
        self.bookings = next;

        info!(
            "Booked {} {} at {} for {} (id {})",
            booking.service_title, booking.date, booking.time, booking.user_email, booking.id
        );
        Ok(booking)
    }

    /// Flips an upcoming, not yet past booking to cancelled.
    pub async fn cancel(&mut self, id: &str, today: NaiveDate) -> Result<Booking, BookingError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        let mut next = self.bookings.clone();
        lifecycle::cancel(&mut next[index], today)?;
        self.persist(&next).await?;
        self.bookings = next;

        let cancelled = self.bookings[index].clone();
        info!("Cancelled booking {}", cancelled.id);
        Ok(cancelled)
    }

    async fn persist(&self, bookings: &[Booking]) -> Result<(), BookingError> {
        let raw = encode_bookings(bookings)?;
        self.kv.set(&self.key, raw).await?;
        debug!("Persisted {} bookings to '{}'", bookings.len(), self.key);
        Ok(())
    }
}

async fn read_entry(kv: &SharedStore, key: &str) -> Vec<Booking> {
    match kv.get(key).await {
        Ok(Some(raw)) => decode_bookings(&raw),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Could not read '{}' from storage: {}", key, e);
            Vec::new()
        }
    }
}
