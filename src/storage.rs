use crate::model::{HandicapPair, Member, PlayerScore, PlayerTotal, RoundDetails};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Data-access seam for one round's snapshot.
///
/// The engine reads everything it needs for a round through this trait and
/// writes nothing back except the optional totals cache. Implementations
/// must return data from a single consistent snapshot; reading scores and
/// handicaps from uncoordinated queries can observe a half-updated round.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_round_details(
        &self,
        round_id: i64,
    ) -> Result<Option<RoundDetails>, StorageError>;
    async fn get_members_for_round(&self, round_id: i64) -> Result<Vec<Member>, StorageError>;
    async fn get_scores_for_round(
        &self,
        round_id: i64,
    ) -> Result<Vec<PlayerScore>, StorageError>;
    async fn get_handicaps_for_round(
        &self,
        round_id: i64,
    ) -> Result<Vec<HandicapPair>, StorageError>;
    async fn store_round_totals(
        &self,
        round_id: i64,
        totals: &[PlayerTotal],
    ) -> Result<(), StorageError>;
}
