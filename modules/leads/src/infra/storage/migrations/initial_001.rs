use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Phone).string().null())
                    .col(ColumnDef::new(Contacts::EngineType).string().null())
                    .col(ColumnDef::new(Contacts::Message).text().not_null())
                    .col(
                        ColumnDef::new(Contacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_created_at")
                    .table(Contacts::Table)
                    .col(Contacts::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        let required = |col: QuoteLeads| ColumnDef::new(col).string().not_null().to_owned();
        let optional = |col: QuoteLeads| ColumnDef::new(col).string().null().to_owned();

        manager
            .create_table(
                Table::create()
                    .table(QuoteLeads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuoteLeads::Id).uuid().not_null().primary_key())
                    .col(required(QuoteLeads::FullName))
                    .col(required(QuoteLeads::Phone))
                    .col(required(QuoteLeads::Email))
                    .col(required(QuoteLeads::City))
                    .col(required(QuoteLeads::EngineType))
                    .col(required(QuoteLeads::PowerRange))
                    .col(required(QuoteLeads::Usage))
                    .col(required(QuoteLeads::EngineCount))
                    .col(required(QuoteLeads::VesselType))
                    .col(optional(QuoteLeads::VesselLength))
                    .col(optional(QuoteLeads::VesselYear))
                    .col(optional(QuoteLeads::CurrentEngine))
                    .col(required(QuoteLeads::Timeline))
                    .col(optional(QuoteLeads::Budget))
                    .col(required(QuoteLeads::Priority))
                    .col(
                        ColumnDef::new(QuoteLeads::AdditionalRequirements)
                            .text()
                            .null(),
                    )
                    .col(required(QuoteLeads::PreferredContact))
                    .col(optional(QuoteLeads::PreviousExperience))
                    .col(
                        ColumnDef::new(QuoteLeads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quote_leads_created_at")
                    .table(QuoteLeads::Table)
                    .col(QuoteLeads::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuoteLeads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Phone,
    EngineType,
    Message,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum QuoteLeads {
    Table,
    Id,
    FullName,
    Phone,
    Email,
    City,
    EngineType,
    PowerRange,
    Usage,
    EngineCount,
    VesselType,
    VesselLength,
    VesselYear,
    CurrentEngine,
    Timeline,
    Budget,
    Priority,
    AdditionalRequirements,
    PreferredContact,
    PreviousExperience,
    CreatedAt,
}
