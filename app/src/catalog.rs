//! In-memory show catalog
//!
//! The catalog is built once at startup and shared with handlers as router
//! state. Shows and the id counter sit behind a single lock, so allocating an
//! id and appending the show is one step.

use crate::models::{show, theatre, NewShow, Show, Theatre};
use marquee::{FrameworkError, HttpError, HttpResponse};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("show catalog lock poisoned by a panicked writer")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CatalogError {
    fn from(_: PoisonError<T>) -> Self {
        CatalogError::Poisoned
    }
}

impl HttpError for CatalogError {}

impl From<CatalogError> for FrameworkError {
    fn from(err: CatalogError) -> Self {
        FrameworkError::from_http_error(&err)
    }
}

impl From<CatalogError> for HttpResponse {
    fn from(err: CatalogError) -> Self {
        FrameworkError::from(err).into()
    }
}

#[derive(Debug)]
struct Shows {
    entries: Vec<Show>,
    next_id: i64,
}

#[derive(Debug)]
pub struct ShowCatalog {
    shows: RwLock<Shows>,
    theatres: Vec<Theatre>,
}

impl ShowCatalog {
    /// Create a catalog; new ids continue after the highest existing one
    pub fn new(shows: Vec<Show>, theatres: Vec<Theatre>) -> Self {
        let next_id = shows.iter().map(|s| s.show_id).max().unwrap_or(0) + 1;
        Self {
            shows: RwLock::new(Shows {
                entries: shows,
                next_id,
            }),
            theatres,
        }
    }

    /// The catalog the service starts with
    pub fn seeded() -> Self {
        Self::new(show::seed(), theatre::seed())
    }

    /// Every show, in insertion order
    pub fn all_shows(&self) -> Result<Vec<Show>, CatalogError> {
        Ok(self.read()?.entries.clone())
    }

    /// The first show with `show_id == id`
    pub fn find_show(&self, id: i64) -> Result<Option<Show>, CatalogError> {
        Ok(self
            .read()?
            .entries
            .iter()
            .find(|show| show.show_id == id)
            .cloned())
    }

    /// Assign the next id to `new_show` and append it
    pub fn add_show(&self, new_show: NewShow) -> Result<Show, CatalogError> {
        let mut shows = self.write()?;
        let show = new_show.with_id(shows.next_id);
        shows.next_id += 1;
        shows.entries.push(show.clone());
        Ok(show)
    }

    pub fn show_count(&self) -> Result<usize, CatalogError> {
        Ok(self.read()?.entries.len())
    }

    pub fn theatres(&self) -> &[Theatre] {
        &self.theatres
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shows>, CatalogError> {
        Ok(self.shows.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shows>, CatalogError> {
        Ok(self.shows.write()?)
    }
}

impl Default for ShowCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn phantom() -> NewShow {
        NewShow {
            title: "Phantom of the Opera".to_string(),
            theatre_id: 2,
            time: "5:00 PM".to_string(),
        }
    }

    #[test]
    fn finds_every_seeded_show_by_id() {
        let catalog = ShowCatalog::seeded();
        for show in show::seed() {
            assert_eq!(catalog.find_show(show.show_id).unwrap(), Some(show));
        }
        assert_eq!(catalog.find_show(9).unwrap(), None);
    }

    #[test]
    fn add_show_appends_with_the_next_id() {
        let catalog = ShowCatalog::seeded();
        let before = catalog.show_count().unwrap();

        let created = catalog.add_show(phantom()).unwrap();

        assert_eq!(created.show_id, before as i64 + 1);
        let shows = catalog.all_shows().unwrap();
        assert_eq!(shows.last(), Some(&created));
        assert_eq!(shows.len(), before + 1);
    }

    #[test]
    fn ids_continue_after_the_highest_existing_id() {
        let catalog = ShowCatalog::new(vec![phantom().with_id(10)], Vec::new());
        assert_eq!(catalog.add_show(phantom()).unwrap().show_id, 11);

        let empty = ShowCatalog::new(Vec::new(), Vec::new());
        assert_eq!(empty.add_show(phantom()).unwrap().show_id, 1);
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let catalog = Arc::new(ShowCatalog::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = catalog.clone();
                std::thread::spawn(move || catalog.add_show(phantom()).unwrap().show_id)
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (5..13).collect::<Vec<_>>());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let catalog = Arc::new(ShowCatalog::seeded());
        let poisoner = catalog.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.shows.write().unwrap();
            panic!("writer crashed mid-update");
        })
        .join();

        assert!(matches!(catalog.all_shows(), Err(CatalogError::Poisoned)));
        let err = FrameworkError::from(CatalogError::Poisoned);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn theatres_are_seeded() {
        let catalog = ShowCatalog::seeded();
        let names: Vec<&str> = catalog
            .theatres()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Regal Cinemas", "AMC Theatres", "Cinemark"]);
    }
}
