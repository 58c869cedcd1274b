//! # Application State
//!
//! In-memory reservation store shared by all route handlers. Lookup is by
//! storage id or by record locator; data is lost on restart.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use pnrgov_core::{Reservation, ReservationId};

/// Inner storage behind the shared handle.
struct Inner {
    reservations: DashMap<Uuid, Reservation>,
}

/// Shared application state. Cheaply cloneable via `Arc` — all clones see
/// the same data.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                reservations: DashMap::new(),
            }),
        }
    }

    /// Insert a reservation, returning its storage id.
    pub fn insert(&self, reservation: Reservation) -> ReservationId {
        let id = reservation.id;
        self.inner.reservations.insert(id.0, reservation);
        id
    }

    /// Look a reservation up by storage id.
    pub fn get(&self, id: &Uuid) -> Option<Reservation> {
        self.inner.reservations.get(id).map(|e| e.value().clone())
    }

    /// Look a reservation up by record locator.
    pub fn get_by_locator(&self, locator: &str) -> Option<Reservation> {
        self.inner
            .reservations
            .iter()
            .find(|e| e.value().record_locator.as_str() == locator)
            .map(|e| e.value().clone())
    }

    /// All stored reservations.
    pub fn list(&self) -> Vec<Reservation> {
        self.inner
            .reservations
            .iter()
            .map(|e| e.value().clone())
            .collect()
    }

    /// Remove a reservation, returning it when present.
    pub fn remove(&self, id: &Uuid) -> Option<Reservation> {
        self.inner.reservations.remove(id).map(|(_, r)| r)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
