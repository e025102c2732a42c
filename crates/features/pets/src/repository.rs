use crate::domain::{NewRegistration, PetSummary, Registered, Species};
use crate::error::{PetsError, PetsErrorExt};
use petreg_database::Database;
use sqlx::{Any, Transaction};
use tracing::{debug, info, instrument, warn};

const INSERT_OWNER: &str = "INSERT INTO donos (nome, telefone) VALUES ($1, $2) RETURNING id";
const INSERT_PET: &str =
    "INSERT INTO pets (nome, especie, idade, dono_id) VALUES ($1, $2, $3, $4) RETURNING id";
const LIST_PETS: &str = "SELECT pets.id AS id, pets.nome AS name, pets.especie AS species, \
     CAST(pets.idade AS BIGINT) AS age, donos.nome AS owner_name \
     FROM pets LEFT JOIN donos ON donos.id = pets.dono_id \
     ORDER BY pets.id DESC";
const DELETE_PET: &str = "DELETE FROM pets WHERE id = $1";

/// Storage access of the pets slice.
///
/// Holds the shared [`Database`] handle; every call acquires its own connection.
#[derive(Debug, Clone)]
pub struct PetRepository {
    db: Database,
}

impl PetRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Stores the owner, then the pet pointing at it, in one transaction.
    ///
    /// Either both rows persist or neither does. Owners are never reused: every call
    /// creates a new owner row.
    #[instrument(skip_all, fields(owner = %registration.owner.name, pet = %registration.pet.name))]
    pub async fn register(&self, registration: &NewRegistration) -> Result<Registered, PetsError> {
        if registration.pet.species.parse::<Species>().is_err() {
            debug!(species = %registration.pet.species, "Species outside the form catalogue");
        }

        let mut tx = self.db.begin().await.context("Opening registration transaction")?;

        match insert_pair(&mut tx, registration).await {
            Ok(registered) => {
                tx.commit().await.context("Committing registration")?;
                info!(owner_id = registered.owner_id, pet_id = registered.pet_id, "Pet registered");
                Ok(registered)
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "Registration rollback failed");
                }
                Err(err)
            }
        }
    }

    /// All pets with their owner's name, newest first.
    pub async fn list(&self) -> Result<Vec<PetSummary>, PetsError> {
        sqlx::query_as::<_, PetSummary>(LIST_PETS).fetch_all(&*self.db).await.context("Listing pets")
    }

    /// Removes one pet; its owner row stays.
    ///
    /// # Errors
    /// [`PetsError::NotFound`] when no pet has this id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), PetsError> {
        let result =
            sqlx::query(DELETE_PET).bind(id).execute(&*self.db).await.context("Deleting pet")?;

        if result.rows_affected() == 0 {
            info!("No pet to delete");
            return Err(PetsError::NotFound { message: format!("id {id}").into(), context: None });
        }

        info!("Pet deleted");
        Ok(())
    }
}

async fn insert_pair(
    tx: &mut Transaction<'static, Any>,
    registration: &NewRegistration,
) -> Result<Registered, PetsError> {
    let NewRegistration { owner, pet } = registration;

    let owner_id: i64 = sqlx::query_scalar(INSERT_OWNER)
        .bind(owner.name.as_str())
        .bind(owner.phone.as_deref())
        .fetch_one(&mut **tx)
        .await
        .context("Inserting owner")?;

    let pet_id: i64 = sqlx::query_scalar(INSERT_PET)
        .bind(pet.name.as_str())
        .bind(pet.species.as_str())
        .bind(pet.age)
        .bind(owner_id)
        .fetch_one(&mut **tx)
        .await
        .context("Inserting pet")?;

    Ok(Registered { owner_id, pet_id })
}
