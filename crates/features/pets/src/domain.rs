//! Owner and pet records, the registration request and its validation.

use crate::error::PetsError;
use crate::messages;
use petreg_derive::api_model;
use serde::{Deserialize, Deserializer};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Species offered by the registration form.
///
/// The wire value is the Portuguese label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr, EnumString)]
pub enum Species {
    Cachorro,
    Gato,
    #[strum(serialize = "Pássaro")]
    Passaro,
    Coelho,
    Hamster,
    Outros,
}

#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone)]
/// Owner and pet submitted together
///
/// Fields outside the form are ignored.
pub struct CreatePetRequest {
    /// Owner name (required)
    #[serde(rename = "nomeDono")]
    #[cfg_attr(feature = "server", schema(example = "Ana"))]
    pub owner_name: Option<String>,
    /// Owner phone, digits only; a JSON number is taken as its digits
    #[serde(rename = "telefoneDono", default, deserialize_with = "text_or_digits")]
    #[cfg_attr(feature = "server", schema(example = "11987654321"))]
    pub owner_phone: Option<String>,
    /// Pet name (required)
    #[serde(rename = "nomePet")]
    #[cfg_attr(feature = "server", schema(example = "Rex"))]
    pub pet_name: Option<String>,
    /// Pet species (required)
    #[serde(rename = "especiePet")]
    #[cfg_attr(feature = "server", schema(example = "Cachorro"))]
    pub species: Option<String>,
    /// Age in years
    #[serde(rename = "idadePet")]
    #[cfg_attr(feature = "server", schema(example = 3))]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOwner {
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub age: Option<i32>,
}

/// A validated request, ready to be stored in one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub owner: NewOwner,
    pub pet: NewPet,
}

/// Identities generated for a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registered {
    pub owner_id: i64,
    pub pet_id: i64,
}

#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
/// A pet joined with its owner's name
pub struct PetSummary {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especie")]
    pub species: String,
    #[serde(rename = "idade")]
    pub age: Option<i64>,
    #[serde(rename = "nome_dono")]
    pub owner_name: Option<String>,
}

impl CreatePetRequest {
    /// Trims every text field and checks the required ones.
    ///
    /// A blank phone is stored as absent.
    ///
    /// # Errors
    /// [`PetsError::Validation`] when the owner name, pet name or species is missing or blank.
    pub fn into_registration(self) -> Result<NewRegistration, PetsError> {
        let (Some(owner_name), Some(pet_name), Some(species)) =
            (required(self.owner_name), required(self.pet_name), required(self.species))
        else {
            return Err(PetsError::Validation { message: messages::REQUIRED_FIELDS.into(), context: None });
        };

        Ok(NewRegistration {
            owner: NewOwner { name: owner_name, phone: required(self.owner_phone) },
            pet: NewPet { name: pet_name, species, age: self.age },
        })
    }
}

fn text_or_digits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Digits(u64),
    }

    Ok(Option::<Phone>::deserialize(deserializer)?.map(|phone| match phone {
        Phone::Text(text) => text,
        Phone::Digits(digits) => digits.to_string(),
    }))
}

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
