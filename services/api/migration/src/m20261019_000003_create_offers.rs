use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // order_id -> orders.id, executor_id -> users.id; neither is enforced.
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Offers::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Offers::OrderId).integer().null())
                    .col(ColumnDef::new(Offers::ExecutorId).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Offers {
    Table,
    Id,
    OrderId,
    ExecutorId,
}
