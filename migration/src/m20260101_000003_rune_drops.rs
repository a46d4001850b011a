use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000002_runs::Runs;

static IDX_RUNE_DROPS_RUN_ID: &str = "idx-rune_drops-run_id";
static FK_RUNE_DROPS_RUN_ID: &str = "fk-rune_drops-run_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RuneDrops::Table)
                    .if_not_exists()
                    .col(pk_auto(RuneDrops::Id))
                    .col(integer(RuneDrops::RunId))
                    .col(string(RuneDrops::Rune))
                    .col(integer(RuneDrops::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RUNE_DROPS_RUN_ID)
                            .from(RuneDrops::Table, RuneDrops::RunId)
                            .to(Runs::Table, Runs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RUNE_DROPS_RUN_ID)
                    .table(RuneDrops::Table)
                    .col(RuneDrops::RunId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RUNE_DROPS_RUN_ID)
                    .table(RuneDrops::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RuneDrops::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RuneDrops {
    Table,
    Id,
    RunId,
    Rune,
    Quantity,
}
