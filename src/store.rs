//! Restaurant table.
//!
//! One logical table, held as an in-memory map keyed by integer id and
//! snapshot-persisted as a single JSON document. Every mutation rewrites the whole document, so a save is
//! all-or-nothing. Rows are never deleted in normal operation.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::normalize::normalize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    /// Unique across the table; duplicate seeding is a no-op.
    pub name: String,
    /// Canonical cuisine label, normalized on every write path.
    #[serde(rename = "type")]
    pub cuisine_type: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub contact: String,
    pub available: bool,
    /// Last reported wait in minutes, updated by incoming reports.
    pub wait_time: u32,
}

pub struct RestaurantStore {
    path: PathBuf,
    rows: RwLock<BTreeMap<u32, Restaurant>>,
}

impl RestaurantStore {
    /// Opens the store at `path`, loading any existing snapshot. A missing
    /// or corrupt snapshot starts an empty table.
    pub fn open(path: PathBuf) -> Self {
        let rows = match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Vec<Restaurant>>(&data) {
                Ok(restaurants) => restaurants.into_iter().map(|r| (r.id, r)).collect(),
                Err(e) => {
                    warn!("Corrupt restaurant table at {path:?}, starting empty: {e}");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            rows: RwLock::new(rows),
        }
    }

    /// Inserts seed rows, skipping any name already present, and returns
    /// how many were added.
    pub fn seed(&self, entries: &[(&str, &str, f64, f64)]) -> std::io::Result<usize> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let mut added = 0;
        for (name, cuisine_type, lat, lon) in entries {
            if rows.values().any(|r| r.name == *name) {
                continue;
            }
            let id = next_id(&rows);
            rows.insert(
                id,
                Restaurant {
                    id,
                    name: (*name).to_string(),
                    cuisine_type: normalize(cuisine_type),
                    lat: Some(*lat),
                    lon: Some(*lon),
                    contact: String::new(),
                    available: true,
                    wait_time: 0,
                },
            );
            added += 1;
        }

        if added > 0 {
            save(&self.path, &rows)?;
        }
        Ok(added)
    }

    /// Renormalizes cuisine labels already on disk and returns how many
    /// rows changed. Keeps old snapshots comparable with current filters.
    pub fn normalize_types(&self) -> std::io::Result<usize> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let mut changed = 0;
        for row in rows.values_mut() {
            let canonical = normalize(&row.cuisine_type);
            if row.cuisine_type != canonical {
                row.cuisine_type = canonical;
                changed += 1;
            }
        }

        if changed > 0 {
            save(&self.path, &rows)?;
        }
        Ok(changed)
    }

    /// Inserts one restaurant with the next free id, normalizing its type.
    /// Name uniqueness outside seeding is the caller's concern.
    pub fn insert(
        &self,
        name: String,
        cuisine_type: &str,
        lat: Option<f64>,
        lon: Option<f64>,
        contact: String,
    ) -> std::io::Result<Restaurant> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let id = next_id(&rows);
        let restaurant = Restaurant {
            id,
            name,
            cuisine_type: normalize(cuisine_type),
            lat,
            lon,
            contact,
            available: true,
            wait_time: 0,
        };
        rows.insert(id, restaurant.clone());
        save(&self.path, &rows)?;
        Ok(restaurant)
    }

    pub fn get(&self, id: u32) -> Option<Restaurant> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&id).cloned()
    }

    /// All rows in id order, regardless of availability.
    pub fn all(&self) -> Vec<Restaurant> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.values().cloned().collect()
    }

    /// Only rows currently flagged available, in id order.
    pub fn list_available(&self) -> Vec<Restaurant> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.values().filter(|r| r.available).cloned().collect()
    }

    /// Flips availability and persists. Returns the new flag, or `None`
    /// for an unknown id. No transition history is kept.
    pub fn toggle_available(&self, id: u32) -> std::io::Result<Option<bool>> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        row.available = !row.available;
        let now_available = row.available;

        save(&self.path, &rows)?;
        Ok(Some(now_available))
    }

    /// Records the latest reported wait. Returns false for an unknown id.
    pub fn set_wait_time(&self, id: u32, wait_minutes: u32) -> std::io::Result<bool> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let Some(row) = rows.get_mut(&id) else {
            return Ok(false);
        };
        row.wait_time = wait_minutes;

        save(&self.path, &rows)?;
        Ok(true)
    }
}

fn next_id(rows: &BTreeMap<u32, Restaurant>) -> u32 {
    rows.keys().next_back().map_or(1, |max| max + 1)
}

fn save(path: &std::path::Path, rows: &BTreeMap<u32, Restaurant>) -> std::io::Result<()> {
    let snapshot: Vec<&Restaurant> = rows.values().collect();
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, &snapshot)?;
    file.flush()?;
    Ok(())
}
