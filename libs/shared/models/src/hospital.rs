use serde::{Deserialize, Deserializer, Serialize};

/// Shown when a hospital photo fails to load.
pub const HOSPITAL_IMAGE_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1538108149393-fbbd81895907?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2128&q=80";

/// Shown when a doctor or patient portrait fails to load.
pub const PORTRAIT_PLACEHOLDER: &str = "https://randomuser.me/api/portraits/men/1.jpg";

/// Reads an absent or `null` field as its default. The hospital API leaves
/// optional profile fields null on records that are otherwise usable.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Hospital {
    pub fn image(&self) -> ImageRef {
        ImageRef::new(&self.image_url, HOSPITAL_IMAGE_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialization: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor_image: String,
}

impl Doctor {
    pub fn image(&self) -> ImageRef {
        ImageRef::new(&self.doctor_image, PORTRAIT_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotOwner {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// One day of availability for a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: SlotOwner,
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Vec<Slot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl SlotResponse {
    pub fn options(&self) -> impl Iterator<Item = SlotOption> + '_ {
        self.slots.iter().map(move |slot| SlotOption::new(&self.date, slot))
    }
}

/// A single entry of the flattened slot selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOption {
    pub slot_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub label: String,
}

impl SlotOption {
    pub fn new(date: &str, slot: &Slot) -> Self {
        Self {
            slot_id: slot.id.clone(),
            date: date.to_string(),
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            label: format!("{} ({} - {})", date, slot.start_time, slot.end_time),
        }
    }
}

/// Expands every day group into one option per time range, keeping order.
pub fn flatten_slots(groups: &[SlotResponse]) -> Vec<SlotOption> {
    groups.iter().flat_map(SlotResponse::options).collect()
}

/// Payload of `POST /patients/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub name: String,
    pub contact_number: String,
    pub diagnosis: String,
    pub doctor_id: String,
    pub hospital_id: String,
    pub slot_id: String,
}

/// An image source together with the placeholder the page swaps in on load error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub fallback: String,
}

impl ImageRef {
    pub fn new(src: &str, fallback: &str) -> Self {
        let src = if src.trim().is_empty() { fallback } else { src };
        Self {
            src: src.to_string(),
            fallback: fallback.to_string(),
        }
    }
}
