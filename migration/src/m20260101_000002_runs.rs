use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_users::Users;

static IDX_RUNS_USER_ID: &str = "idx-runs-user_id";
static FK_RUNS_USER_ID: &str = "fk-runs-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Runs::Table)
                    .if_not_exists()
                    .col(pk_auto(Runs::Id))
                    .col(integer(Runs::UserId))
                    .col(string(Runs::Area))
                    .col(string(Runs::Difficulty))
                    .col(integer(Runs::UniqueCount))
                    .col(integer(Runs::SetCount))
                    .col(integer(Runs::HighRuneCount))
                    .col(integer(Runs::SessionSecs))
                    .col(timestamp(Runs::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RUNS_USER_ID)
                            .from(Runs::Table, Runs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RUNS_USER_ID)
                    .table(Runs::Table)
                    .col(Runs::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RUNS_USER_ID)
                    .table(Runs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Runs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Runs {
    Table,
    Id,
    UserId,
    Area,
    Difficulty,
    UniqueCount,
    SetCount,
    HighRuneCount,
    SessionSecs,
    CreatedAt,
}
