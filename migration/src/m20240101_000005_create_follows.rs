use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create follows table
        //
        // Two datastore-enforced invariants: a user may not follow
        // themselves (CHECK), and a (user, following) pair is unique.
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Follows::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Follows::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Follows::FollowingId)
                            .uuid()
                            .not_null()
                            .check(
                                Expr::col(Follows::UserId).ne(Expr::col(Follows::FollowingId)),
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_user")
                            .from(Follows::Table, Follows::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_following")
                            .from(Follows::Table, Follows::FollowingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index over the (user, following) pair
        manager
            .create_index(
                Index::create()
                    .name("uq_follows_user_following")
                    .table(Follows::Table)
                    .col(Follows::UserId)
                    .col(Follows::FollowingId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Follows {
    Table,
    Id,
    UserId,
    FollowingId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
