//! Aggregated run statistics for summaries, the leaderboard and the stats page.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        run::{RunDto, RuneDropDto},
        stats::{DailyHighRunesDto, LeaderboardEntryDto, RuneTallyDto, UserSummaryDto},
    },
    server::{
        data::{run::RunRepository, rune_drop::RuneDropRepository},
        error::Error,
        reference::ReferenceData,
    },
};

fn average(total: i64, runs: i64) -> f64 {
    if runs == 0 {
        0.0
    } else {
        total as f64 / runs as f64
    }
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
    reference: &'a ReferenceData,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection, reference: &'a ReferenceData) -> Self {
        Self { db, reference }
    }

    /// Lifetime totals of a user, all zero when nothing was logged yet
    pub async fn user_summary(&self, user_id: i32) -> Result<UserSummaryDto, Error> {
        let totals = RunRepository::new(self.db)
            .get_totals_by_user_id(user_id)
            .await?;

        let total_high_runes = totals.total_high_runes.unwrap_or(0);

        Ok(UserSummaryDto {
            runs: totals.runs,
            total_high_runes,
            total_uniques: totals.total_uniques.unwrap_or(0),
            total_sets: totals.total_sets.unwrap_or(0),
            average_high_runes: average(total_high_runes, totals.runs),
        })
    }

    /// Top `limit` users by lifetime high runes.
    ///
    /// Equal totals are ranked by ascending user ID so the order is stable across calls.
    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntryDto>, Error> {
        let rows = RunRepository::new(self.db).get_leaderboard(limit).await?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| LeaderboardEntryDto {
                rank: index + 1,
                average_high_runes: average(row.total_high_runes, row.runs),
                username: row.username,
                total_high_runes: row.total_high_runes,
                runs: row.runs,
            })
            .collect())
    }

    /// Latest runs of a user with their drops, newest first
    pub async fn recent_runs(&self, user_id: i32, limit: u64) -> Result<Vec<RunDto>, Error> {
        let runs = RunRepository::new(self.db)
            .get_recent_by_user_id(user_id, limit)
            .await?;

        let run_ids: Vec<i32> = runs.iter().map(|run| run.id).collect();
        let drops = RuneDropRepository::new(self.db)
            .get_many_by_run_ids(&run_ids)
            .await?;

        let mut drops_by_run: HashMap<i32, Vec<RuneDropDto>> = HashMap::new();
        for drop in drops {
            drops_by_run
                .entry(drop.run_id)
                .or_default()
                .push(RuneDropDto {
                    rune: drop.rune,
                    quantity: drop.quantity,
                });
        }

        Ok(runs
            .into_iter()
            .map(|run| RunDto {
                drops: drops_by_run.remove(&run.id).unwrap_or_default(),
                id: run.id,
                area: run.area,
                difficulty: run.difficulty.as_str().to_string(),
                unique_count: run.unique_count,
                set_count: run.set_count,
                high_rune_count: run.high_rune_count,
                session_secs: run.session_secs,
                created_at: run.created_at,
            })
            .collect())
    }

    /// Lifetime quantity per rune, most valuable rune first
    ///
    /// Names outside the rune list sort after every known rune.
    pub async fn rune_tally(&self, user_id: i32) -> Result<Vec<RuneTallyDto>, Error> {
        let mut tally = RuneDropRepository::new(self.db)
            .get_tally_by_user_id(user_id)
            .await?;

        tally.sort_by(|(a, _), (b, _)| {
            let rank_a = self.reference.rune_rank(a);
            let rank_b = self.reference.rune_rank(b);

            rank_b.cmp(&rank_a).then_with(|| a.cmp(b))
        });

        Ok(tally
            .into_iter()
            .map(|(rune, quantity)| RuneTallyDto {
                high: self.reference.is_high_rune(&rune),
                rune,
                quantity,
            })
            .collect())
    }

    /// High runes per UTC day over the last `days` days including today, oldest first
    pub async fn daily_high_runes(
        &self,
        user_id: i32,
        days: u64,
    ) -> Result<Vec<DailyHighRunesDto>, Error> {
        self.daily_high_runes_until(user_id, days, Utc::now().date_naive())
            .await
    }

    async fn daily_high_runes_until(
        &self,
        user_id: i32,
        days: u64,
        today: NaiveDate,
    ) -> Result<Vec<DailyHighRunesDto>, Error> {
        if days == 0 {
            return Ok(Vec::new());
        }

        let first_day = today
            .checked_sub_days(Days::new(days - 1))
            .ok_or_else(|| Error::ParseError(format!("{} days before {}", days, today)))?;

        let runs = RunRepository::new(self.db)
            .get_high_runes_since(user_id, first_day.and_time(Default::default()))
            .await?;

        let mut per_day: HashMap<NaiveDate, i64> = HashMap::new();
        for (created_at, high_rune_count) in runs {
            *per_day.entry(created_at.date()).or_default() += i64::from(high_rune_count);
        }

        Ok(first_day
            .iter_days()
            .take(days as usize)
            .map(|day| DailyHighRunesDto {
                day,
                high_runes: per_day.get(&day).copied().unwrap_or(0),
            })
            .collect())
    }
}
