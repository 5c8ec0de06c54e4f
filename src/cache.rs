// text2matrix/src/cache.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A keyed registry of loaded fonts.
//!
//! Keys default to the hex-encoded SHA-256 digest of the raw font bytes, so
//! identical font data always maps to the same entry and is parsed exactly
//! once. The cache is an explicit object: callers hold one and pass it to
//! the entry points, which keeps registries isolated and testable rather
//! than hidden process-wide state.
//!
//! Loading is single-flight per key: concurrent `add_font` calls racing on
//! the same uncached key serialize through a per-key slot, and exactly one
//! of them parses. A failed load is cached as the failure and replayed to
//! every waiter; `remove_font` clears it if the caller wants to retry.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::{FontLoadingError, SelectionError};
use crate::font::Font;
use crate::handle::Handle;
use crate::loader::Loader;
use crate::utils;

/// A thread-safe registry mapping content-hash keys to loaded fonts.
pub struct FontCache<F = Font>
where
    F: Loader,
{
    slots: Mutex<HashMap<String, Arc<FontSlot<F>>>>,
}

/// The load barrier for one key. Created before the parse completes so that
/// racing callers have something to wait on.
struct FontSlot<F> {
    cell: OnceLock<Result<Arc<F>, FontLoadingError>>,
}

impl<F> FontCache<F>
where
    F: Loader,
{
    /// Creates an empty cache.
    pub fn new() -> FontCache<F> {
        FontCache {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Loads the font behind `handle` into the cache and returns its key.
    ///
    /// If `key` is `None`, the key is the hex-encoded SHA-256 digest of the
    /// raw bytes. The font is parsed at most once per key, no matter how
    /// many callers race on it; later calls with an already-cached key
    /// return immediately without touching the font data again.
    pub fn add_font(&self, handle: &Handle, key: Option<&str>) -> Result<String, FontLoadingError> {
        let bytes = handle.load_bytes()?;
        let key = match key {
            Some(key) => key.to_owned(),
            None => utils::sha256_hex(&bytes),
        };

        let slot = {
            let mut slots = self.slots.lock().unwrap();
            slots
                .entry(key.clone())
                .or_insert_with(|| {
                    Arc::new(FontSlot {
                        cell: OnceLock::new(),
                    })
                })
                .clone()
        };

        // The map lock is released; only callers racing on *this* key block
        // here, and exactly one of them runs the parse.
        let result = slot.cell.get_or_init(|| {
            debug!("loading font for key {}", key);
            F::from_bytes(bytes.clone()).map(Arc::new)
        });

        match *result {
            Ok(_) => Ok(key),
            Err(ref err) => Err(err.clone()),
        }
    }

    /// Returns the font loaded under `key`.
    pub fn get_font(&self, key: &str) -> Result<Arc<F>, SelectionError> {
        let slots = self.slots.lock().unwrap();
        match slots.get(key).and_then(|slot| slot.cell.get()) {
            Some(&Ok(ref font)) => Ok(font.clone()),
            _ => Err(SelectionError::NotLoaded),
        }
    }

    /// Returns true if `key` refers to a successfully loaded font.
    pub fn has_font(&self, key: &str) -> bool {
        self.get_font(key).is_ok()
    }

    /// Removes the entry under `key`, if any.
    ///
    /// Fonts already handed out via [`FontCache::get_font`] stay alive; only
    /// the registry entry goes away.
    pub fn remove_font(&self, key: &str) {
        let mut slots = self.slots.lock().unwrap();
        slots.remove(key);
    }

    /// The number of successfully loaded fonts in the cache.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap();
        slots
            .values()
            .filter(|slot| matches!(slot.cell.get(), Some(Ok(_))))
            .count()
    }

    /// Returns true if the cache holds no loaded fonts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let mut slots = self.slots.lock().unwrap();
        slots.clear();
    }
}

impl<F> Default for FontCache<F>
where
    F: Loader,
{
    fn default() -> FontCache<F> {
        FontCache::new()
    }
}
