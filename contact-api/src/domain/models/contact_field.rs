use strum::{Display, EnumString};

use super::{ContactFieldId, ContactId};

/// The type of datapoint a contact field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContactFieldKind {
    Email,
    Phone,
}

/// A single typed datapoint attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactField {
    pub id: ContactFieldId,
    pub contact_id: ContactId,
    pub kind: ContactFieldKind,
    pub value: String,
}

impl ContactField {
    pub fn new(
        id: ContactFieldId,
        contact_id: ContactId,
        kind: ContactFieldKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            contact_id,
            kind,
            value: value.into(),
        }
    }
}
