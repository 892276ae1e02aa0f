//! In-process coupon store
//!
//! Stands in for the database when no storage engine is configured. Rows live
//! in an id-ordered map; ids come from a counter that never reuses values.

use crate::contract::{Coupon, NewCoupon};
use crate::domain::repository::{CouponRepository, CouponStore, Staged, StoreError};
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Coupon>,
    last_id: i32,
}

impl Table {
    /// ASCII-only case folding, matching SQLite's `lower()` in the name index
    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.rows
            .values()
            .any(|c| Some(c.id) != except && c.name.eq_ignore_ascii_case(name))
    }
}

/// Coupon store kept in process memory
#[derive(Clone, Default)]
pub struct InMemoryCouponStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCouponStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored coupons
    pub fn count(&self) -> usize {
        self.table.read().rows.len()
    }
}

impl CouponStore for InMemoryCouponStore {
    fn repository(&self) -> Box<dyn CouponRepository> {
        Box::new(InMemoryCouponRepository {
            table: self.table.clone(),
            staged: Vec::new(),
        })
    }
}

pub struct InMemoryCouponRepository {
    table: Arc<RwLock<Table>>,
    staged: Vec<Staged>,
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn get_all(&self) -> Result<Vec<Coupon>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    fn create(&mut self, coupon: NewCoupon) {
        self.staged.push(Staged::Insert(coupon));
    }

    fn update(&mut self, coupon: Coupon) {
        self.staged.push(Staged::Update(coupon));
    }

    fn remove(&mut self, coupon: Coupon) {
        self.staged.push(Staged::Remove(coupon));
    }

    async fn persist(&mut self) -> Result<Vec<Coupon>> {
        let staged = std::mem::take(&mut self.staged);
        let mut guard = self.table.write();

        // Apply to a copy so a failing change leaves the table untouched.
        let mut table = Table {
            rows: guard.rows.clone(),
            last_id: guard.last_id,
        };
        let mut inserted = Vec::new();

        for change in staged {
            match change {
                Staged::Insert(coupon) => {
                    if table.name_taken(&coupon.name, None) {
                        return Err(StoreError::DuplicateName { name: coupon.name }.into());
                    }
                    table.last_id += 1;
                    let coupon = coupon.into_coupon(table.last_id);
                    table.rows.insert(coupon.id, coupon.clone());
                    inserted.push(coupon);
                }
                Staged::Update(coupon) => {
                    let Some(created) = table.rows.get(&coupon.id).map(|row| row.created) else {
                        return Err(StoreError::Missing { id: coupon.id }.into());
                    };
                    if table.name_taken(&coupon.name, Some(coupon.id)) {
                        return Err(StoreError::DuplicateName { name: coupon.name }.into());
                    }
                    table.rows.insert(coupon.id, Coupon { created, ..coupon });
                }
                Staged::Remove(coupon) => {
                    if table.rows.remove(&coupon.id).is_none() {
                        return Err(StoreError::Missing { id: coupon.id }.into());
                    }
                }
            }
        }

        *guard = table;
        Ok(inserted)
    }
}
