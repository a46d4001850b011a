//! Run logging.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{run::RunRepository, rune_drop::RuneDropRepository},
    error::{validation::ValidationError, Error},
    model::run::RunSubmission,
    reference::{ReferenceData, UnknownRunePolicy},
};

pub struct RunService<'a> {
    db: &'a DatabaseConnection,
    reference: &'a ReferenceData,
    unknown_rune_policy: UnknownRunePolicy,
}

impl<'a> RunService<'a> {
    /// Creates a new instance of [`RunService`]
    pub fn new(
        db: &'a DatabaseConnection,
        reference: &'a ReferenceData,
        unknown_rune_policy: UnknownRunePolicy,
    ) -> Self {
        Self {
            db,
            reference,
            unknown_rune_policy,
        }
    }

    /// Records a run and its rune drops for the user.
    ///
    /// The run and every drop are written in one transaction, either all of them persist
    /// or none do.
    ///
    /// # Returns
    /// - `Ok(i32)` - High rune count of this run
    /// - `Err(Error::ValidationError)` - Unknown area, quantity below 1, a high rune total
    ///   too large to store, or unknown rune under [`UnknownRunePolicy::Reject`]
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn log_run(&self, user_id: i32, submission: &RunSubmission) -> Result<i32, Error> {
        self.validate(submission)?;

        let total = self.reference.high_rune_count(
            submission
                .drops
                .iter()
                .map(|drop| (drop.rune.as_str(), drop.quantity)),
        );
        let high_rune_count =
            i32::try_from(total).map_err(|_| ValidationError::HighRuneTotalTooLarge(total))?;

        let txn = self.db.begin().await?;

        let run = RunRepository::new(&txn)
            .create(user_id, submission, high_rune_count)
            .await?;
        RuneDropRepository::new(&txn)
            .create_many(run.id, &submission.drops)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User ID {} logged run {} ({} {}) with {} high runes",
            user_id,
            run.id,
            run.area,
            run.difficulty.as_str(),
            high_rune_count
        );

        Ok(high_rune_count)
    }

    fn validate(&self, submission: &RunSubmission) -> Result<(), ValidationError> {
        if !self.reference.is_known_area(&submission.area) {
            return Err(ValidationError::UnknownArea(submission.area.clone()));
        }

        for drop in &submission.drops {
            if drop.quantity < 1 || drop.quantity > i64::from(i32::MAX) {
                return Err(ValidationError::InvalidQuantity {
                    rune: drop.rune.clone(),
                    quantity: drop.quantity,
                });
            }

            if !self.reference.is_known_rune(&drop.rune) {
                match self.unknown_rune_policy {
                    UnknownRunePolicy::Reject => {
                        return Err(ValidationError::UnknownRune(drop.rune.clone()))
                    }
                    UnknownRunePolicy::Lenient => {
                        tracing::warn!("Accepting unknown rune {:?} without counting it", drop.rune)
                    }
                }
            }
        }

        Ok(())
    }
}
