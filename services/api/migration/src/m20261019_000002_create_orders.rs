use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // customer_id / executor_id reference users.id without a constraint.
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Orders::Name).string().null())
                    .col(ColumnDef::new(Orders::Description).string().null())
                    .col(ColumnDef::new(Orders::StartDate).string().null())
                    .col(ColumnDef::new(Orders::EndDate).string().null())
                    .col(ColumnDef::new(Orders::Address).string().null())
                    .col(ColumnDef::new(Orders::Price).integer().null())
                    .col(ColumnDef::new(Orders::CustomerId).integer().null())
                    .col(ColumnDef::new(Orders::ExecutorId).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Address,
    Price,
    CustomerId,
    ExecutorId,
}
