use once_cell::sync::Lazy;
use tracing::warn;

use super::data::{PhotoRef, PuppyRecord};
use super::error::CatalogError;

/// The fixed (name, photo) pairs the catalog is built from, in grid order
pub const PUPPY_PHOTOS: [(&str, PhotoRef); 15] = [
    ("Jerry.", PhotoRef::new("img_puppy_01")),
    ("Teddy.", PhotoRef::new("img_puppy_02")),
    ("Bella.", PhotoRef::new("img_puppy_03")),
    ("Lucy.", PhotoRef::new("img_puppy_04")),
    ("Rocky.", PhotoRef::new("img_puppy_05")),
    ("Maggie.", PhotoRef::new("img_puppy_06")),
    ("Jake.", PhotoRef::new("img_puppy_07")),
    ("Molly.", PhotoRef::new("img_puppy_08")),
    ("Daisy.", PhotoRef::new("img_puppy_09")),
    ("Rain.", PhotoRef::new("img_puppy_10")),
    ("Dolly.", PhotoRef::new("img_puppy_11")),
    ("Rose.", PhotoRef::new("img_puppy_12")),
    ("Eyre.", PhotoRef::new("img_puppy_13")),
    ("Hiiro.", PhotoRef::new("img_puppy_14")),
    ("HanHan.", PhotoRef::new("img_puppy_15")),
];

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let puppies = PUPPY_PHOTOS
        .iter()
        .filter_map(|&(name, photo)| match PuppyRecord::new(name, photo) {
            Ok(puppy) => Some(puppy),
            Err(e) => {
                warn!(%name, error = %e, "skipping catalog entry");
                None
            }
        })
        .collect();

    Catalog { puppies }
});

/// The Catalog holds every adoptable puppy, in display order.
/// It is built once on first access and never changes afterwards.
#[derive(Debug)]
pub struct Catalog {
    puppies: Vec<PuppyRecord>,
}

impl Catalog {
    /// The process-wide catalog, built on first call
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Number of puppies in the catalog
    pub fn size(&self) -> usize {
        self.puppies.len()
    }

    /// Look up a puppy by its grid index
    pub fn get(&self, index: i64) -> Result<&PuppyRecord, CatalogError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.puppies.get(i))
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Look up a puppy, substituting the first entry for a bad index.
    ///
    /// Returns the index actually used alongside the record.
    pub fn get_or_first(&self, index: i64) -> (usize, &PuppyRecord) {
        match self.get(index) {
            // get() only succeeds for indices in [0, size)
            Ok(puppy) => (index as usize, puppy),
            Err(e) => {
                warn!(error = %e, "falling back to first catalog entry");
                (0, &self.puppies[0])
            }
        }
    }

    /// Iterate over all puppies in catalog order
    pub fn all(&self) -> impl Iterator<Item = &PuppyRecord> + '_ {
        self.puppies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_fixed() {
        assert_eq!(Catalog::global().size(), 15);
        assert_eq!(Catalog::global().size(), PUPPY_PHOTOS.len());
    }

    #[test]
    fn test_get_matches_source_order() {
        let catalog = Catalog::global();

        for (i, (name, photo)) in PUPPY_PHOTOS.iter().enumerate() {
            let puppy = catalog.get(i as i64).unwrap();
            assert_eq!(puppy.nick_name, *name);
            assert_eq!(puppy.photo, *photo);
        }
    }

    #[test]
    fn test_get_is_stable() {
        let catalog = Catalog::global();

        let first = catalog.get(7).unwrap().clone();
        let second = catalog.get(7).unwrap();
        assert_eq!(&first, second);
        assert!(std::ptr::eq(Catalog::global(), catalog));
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = Catalog::global();

        assert_eq!(
            catalog.get(-1),
            Err(CatalogError::IndexOutOfRange { index: -1, size: 15 })
        );
        assert_eq!(
            catalog.get(15),
            Err(CatalogError::IndexOutOfRange { index: 15, size: 15 })
        );
    }

    #[test]
    fn test_get_or_first_falls_back() {
        let catalog = Catalog::global();

        let (index, puppy) = catalog.get_or_first(99);
        assert_eq!(index, 0);
        assert_eq!(puppy.nick_name, "Jerry.");

        let (index, puppy) = catalog.get_or_first(3);
        assert_eq!(index, 3);
        assert_eq!(puppy.nick_name, "Lucy.");
    }

    #[test]
    fn test_all_is_restartable() {
        let catalog = Catalog::global();

        let first: Vec<&str> = catalog.all().map(|p| p.nick_name.as_str()).collect();
        let second: Vec<&str> = catalog.all().map(|p| p.nick_name.as_str()).collect();

        assert_eq!(first.len(), 15);
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&"Jerry."));
        assert_eq!(first.last(), Some(&"HanHan."));
    }
}
