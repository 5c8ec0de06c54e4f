// text2matrix/src/handle.rs
//
// Copyright © 2024 The text2matrix Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Encapsulates the information needed to locate and open a font.
//!
//! This is either the path to the font or the raw in-memory font data.

use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::FontCache;
use crate::error::{FontLoadingError, SelectionError};
use crate::font::Font;
use crate::loader::Loader;

/// Encapsulates the information needed to locate and open a font.
///
/// This is either the path to the font or the raw in-memory font data.
#[derive(Debug, Clone)]
pub enum Handle {
    /// A font on disk referenced by a path.
    Path {
        /// The path to the font.
        path: PathBuf,
    },
    /// A font in memory.
    Memory {
        /// The raw TrueType/OpenType/etc. data that makes up this font.
        bytes: Arc<Vec<u8>>,
    },
}

impl Handle {
    /// Creates a new handle from a path.
    #[inline]
    pub fn from_path(path: PathBuf) -> Handle {
        Handle::Path { path }
    }

    /// Creates a new handle from raw TTF/OTF/etc. data in memory.
    #[inline]
    pub fn from_memory(bytes: Arc<Vec<u8>>) -> Handle {
        Handle::Memory { bytes }
    }

    /// Reads the raw bytes this handle refers to.
    ///
    /// For a memory handle this is free; for a path handle it reads the
    /// file.
    pub fn load_bytes(&self) -> Result<Arc<Vec<u8>>, FontLoadingError> {
        match *self {
            Handle::Path { ref path } => Ok(Arc::new(std::fs::read(path)?)),
            Handle::Memory { ref bytes } => Ok(bytes.clone()),
        }
    }
}

/// A font argument: either an opaque cache key or a direct font handle.
///
/// Entry points accept this sum type instead of guessing what a parameter
/// means. A key is resolved through the cache and fails with
/// [`SelectionError::NotLoaded`] when absent; a direct handle bypasses the
/// cache entirely.
pub enum FontRef<'a, F = Font>
where
    F: Loader,
{
    /// A key previously returned by [`FontCache::add_font`].
    Key(&'a str),
    /// An already-loaded font, used without consulting the cache.
    Handle(&'a F),
}

impl<'a, F> Clone for FontRef<'a, F>
where
    F: Loader,
{
    fn clone(&self) -> FontRef<'a, F> {
        *self
    }
}

impl<'a, F> Copy for FontRef<'a, F> where F: Loader {}

impl<'a, F> FontRef<'a, F>
where
    F: Loader,
{
    /// Resolves this reference against `cache`.
    pub fn resolve(self, cache: &FontCache<F>) -> Result<ResolvedFont<'a, F>, SelectionError> {
        match self {
            FontRef::Key(key) => Ok(ResolvedFont::Cached(cache.get_font(key)?)),
            FontRef::Handle(font) => Ok(ResolvedFont::Borrowed(font)),
        }
    }
}

impl<'a, F> From<&'a str> for FontRef<'a, F>
where
    F: Loader,
{
    fn from(key: &'a str) -> FontRef<'a, F> {
        FontRef::Key(key)
    }
}

impl<'a, F> From<&'a F> for FontRef<'a, F>
where
    F: Loader,
{
    fn from(font: &'a F) -> FontRef<'a, F> {
        FontRef::Handle(font)
    }
}

/// The font a [`FontRef`] resolved to. Dereferences to the font itself.
pub enum ResolvedFont<'a, F>
where
    F: Loader,
{
    /// A shared font owned by the cache.
    Cached(Arc<F>),
    /// A caller-owned font.
    Borrowed(&'a F),
}

impl<'a, F> Deref for ResolvedFont<'a, F>
where
    F: Loader,
{
    type Target = F;

    fn deref(&self) -> &F {
        match *self {
            ResolvedFont::Cached(ref font) => &**font,
            ResolvedFont::Borrowed(font) => font,
        }
    }
}
