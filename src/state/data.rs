/// Shared data structures for the application state
///
/// These structs represent the data model that flows from
/// the catalog into the grid and detail views.

use std::fmt;

use super::error::CatalogError;

/// Breed given to every catalog entry unless overridden
pub const DEFAULT_BREED: &str = "Poodle.";

/// Age in years given to every catalog entry unless overridden
pub const DEFAULT_AGE_YEARS: u32 = 2;

/// Fixed description shared by all catalog entries
pub const DEFAULT_INFO: &str = "Can get along with children.

Get along with cats.

Can get along with dogs.

Go out for a walk every day.

Know how to defecate in designated places.

Know how to listen to simple instructions.

Sterilized.";

/// Opaque reference to a bundled puppy photo.
///
/// Holds the asset's file stem (e.g. "img_puppy_01"). Turning it into
/// something drawable is the job of the `assets` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoRef(&'static str);

impl PhotoRef {
    pub const fn new(stem: &'static str) -> Self {
        Self(stem)
    }

    /// File stem of the bundled asset
    pub fn stem(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Represents a single adoptable puppy
#[derive(Debug, Clone, PartialEq)]
pub struct PuppyRecord {
    /// Display name (e.g., "Jerry.")
    pub nick_name: String,
    /// Photo shown in the grid cell and the detail header
    pub photo: PhotoRef,
    pub breed: String,
    /// true = "Dog", false = "Bitch"
    pub is_male: bool,
    pub age_years: u32,
    /// Short multi-paragraph description
    pub info: String,
    /// Templated biography, derived from name and age
    pub other_info: String,
}

impl PuppyRecord {
    /// Create a record with every optional attribute at its default.
    ///
    /// Fails with `CatalogError::EmptyName` if the name is blank.
    pub fn new(nick_name: impl Into<String>, photo: PhotoRef) -> Result<Self, CatalogError> {
        let nick_name = nick_name.into();
        if nick_name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let other_info = biography(&nick_name, DEFAULT_AGE_YEARS);
        Ok(Self {
            nick_name,
            photo,
            breed: DEFAULT_BREED.to_string(),
            is_male: true,
            age_years: DEFAULT_AGE_YEARS,
            info: DEFAULT_INFO.to_string(),
            other_info,
        })
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn with_sex(mut self, is_male: bool) -> Self {
        self.is_male = is_male;
        self
    }

    /// Override the age; the biography is regenerated to match
    pub fn with_age(mut self, age_years: u32) -> Self {
        self.age_years = age_years;
        self.other_info = biography(&self.nick_name, age_years);
        self
    }
}

/// Build the default biography text for a puppy
pub fn biography(name: &str, age_years: u32) -> String {
    format!(
        "\"{name}\", a {age_years}-year-old lady, was sent to our adoption center today. \
It turned out that his original owner had not taken good care of him about half a year ago. \
He was often hairy and filthy. He had been put in an outdoor cage for a long time. \
Some kind-hearted people asked his original owner to abandon him and wanted to take care of him! \
After \"{name}\" had been spoiled for half a year, problems began to occur, \
Since the kind-hearted person is also an elderly person and does not know how to teach him, \
the current owner has been bitten many times by {name}. \
{name} is a very close child who can get along with cats and dogs. \
The current owner hopes to find a family for him who can teach him. \
If the adopter intends to adopt {name}, he must also pay attention to his behavior! \
Prospective adopter, Must be at least 25 years old, \
if you live in a place where you can't keep dogs, no application will be accepted!"
    )
}
