use serde::Serialize;
use shared::{HairType, PhotoData, ServiceType, TimeSlot, Weekday};

/// Finalized pet credential record.
///
/// Only the intake form can build one, and only after every required field
/// (dog name, owner name, phone, photo, at least one day and one time slot)
/// is present. Fields are read-only from the outside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub(crate) dog_name: String,
    pub(crate) owner_name: String,
    pub(crate) phone: String,
    pub(crate) breed: String,
    pub(crate) hair_type: HairType,
    pub(crate) weight: String,
    pub(crate) age: String,
    pub(crate) service_type: ServiceType,
    pub(crate) availability_days: Vec<Weekday>,
    pub(crate) availability_times: Vec<TimeSlot>,
    pub(crate) custom_tags: Vec<String>,
    pub(crate) notes: String,
    pub(crate) photo: PhotoData,
    /// Local time of finalization, `dd/mm/yy, HH:MM`
    pub(crate) created_at: String,
}

impl Profile {
    pub fn dog_name(&self) -> &str {
        &self.dog_name
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn hair_type(&self) -> HairType {
        self.hair_type
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Selected days in the order they were picked
    pub fn availability_days(&self) -> &[Weekday] {
        &self.availability_days
    }

    /// Selected time slots in the order they were picked
    pub fn availability_times(&self) -> &[TimeSlot] {
        &self.availability_times
    }

    pub fn custom_tags(&self) -> &[String] {
        &self.custom_tags
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn photo(&self) -> &PhotoData {
        &self.photo
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Owner name up to the first space
    pub fn owner_first_name(&self) -> &str {
        self.owner_name.split(' ').next().unwrap_or(&self.owner_name)
    }
}
