//! Form payloads for the mutating routes.
//!
//! Every field is required. A missing field or a non-numeric `id_user` fails
//! form extraction, so the handler never runs.

use agenda_domain::{ContactInput, EntryId};
use serde::Deserialize;

/// `POST /edit`: the six contact fields under `*_edit` names plus the target id.
#[derive(Debug, Deserialize)]
pub struct EditEntryForm {
    #[serde(rename = "name_edit")]
    pub name: String,
    #[serde(rename = "last_name_edit")]
    pub last_name: String,
    #[serde(rename = "address_edit")]
    pub address: String,
    #[serde(rename = "email_edit")]
    pub email: String,
    #[serde(rename = "phone_number_edit")]
    pub phone_number: String,
    #[serde(rename = "phone_type_edit")]
    pub phone_type: String,
    pub id_user: i64,
}

impl EditEntryForm {
    pub fn into_parts(self) -> (EntryId, ContactInput) {
        let input = ContactInput {
            name: self.name,
            last_name: self.last_name,
            address: self.address,
            email: self.email,
            phone_number: self.phone_number,
            phone_type: self.phone_type,
        };
        (EntryId::from_i64(self.id_user), input)
    }
}

/// `POST /delete`
#[derive(Debug, Deserialize)]
pub struct DeleteEntryForm {
    pub id_user: i64,
}

impl DeleteEntryForm {
    pub fn entry_id(&self) -> EntryId {
        EntryId::from_i64(self.id_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_reads_suffixed_names() {
        let form: EditEntryForm = serde_json::from_value(serde_json::json!({
            "name_edit": "Jane",
            "last_name_edit": "Doe",
            "address_edit": "1 Main St",
            "email_edit": "jane@doe.com",
            "phone_number_edit": "555-1234",
            "phone_type_edit": "Home",
            "id_user": 4,
        }))
        .expect("edit form");

        let (id, input) = form.into_parts();
        assert_eq!(id, EntryId::from_i64(4));
        assert_eq!(input.name, "Jane");
        assert_eq!(input.phone_type, "Home");
    }

    #[test]
    fn edit_form_requires_every_field() {
        let result: Result<EditEntryForm, _> = serde_json::from_value(serde_json::json!({
            "name_edit": "Jane",
            "id_user": 4,
        }));
        assert!(result.is_err());
    }
}
